//! # Pricer Risk (L4: Application)
//!
//! Risk statistics over return series and simulated portfolios.
//!
//! This crate provides:
//! - Value-at-Risk, Conditional VaR, Sharpe ratio and maximum drawdown (`metrics`)
//! - Weighted multi-asset GBM portfolio risk simulation (`portfolio`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  metrics/    - VaR, CVaR, Sharpe, MDD   │
//! │  portfolio/  - weighted GBM portfolio   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Path simulation and seeded RNG         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_risk::metrics::{maximum_drawdown, value_at_risk};
//!
//! let returns = [0.01, -0.03, 0.02, -0.01, 0.005];
//! let var_95 = value_at_risk(&returns, 0.95).unwrap();
//! let var_99 = value_at_risk(&returns, 0.99).unwrap();
//! assert!(var_99 >= var_95);
//!
//! assert_eq!(maximum_drawdown(&[1.0, 2.0, 3.0]).unwrap(), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod metrics;
pub mod portfolio;

pub use error::RiskError;
pub use metrics::{risk_metrics, RiskMetricsResult};
pub use portfolio::{portfolio_risk, Asset, PortfolioRiskReport};
