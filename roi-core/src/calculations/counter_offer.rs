//! Counter-offer price solving.
//!
//! Given a desired ROI, solves the base price a buyer could offer so that
//! the income figures of the last calculation hit that ROI:
//! `price = (net ÷ (roi ÷ 100) − other charges) ÷ 1.08`.
//!
//! A non-positive price is a valid answer meaning no price reaches the
//! desired ROI with the current income and charges.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::roi::base_price_for_roi;
use crate::{CounterOffer, RoiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct CounterOfferSolver;

impl CounterOfferSolver {
    /// Solves against a previously computed result.
    ///
    /// Returns `None` when `desired_roi` is not positive; callers keep any
    /// earlier counter offer in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roi_core::RoiResult;
    /// use roi_core::calculations::CounterOfferSolver;
    ///
    /// let result = RoiResult {
    ///     net_annual_income: dec!(1080000),
    ///     ..Default::default()
    /// };
    ///
    /// let offer = CounterOfferSolver.solve(&result, dec!(10)).unwrap();
    ///
    /// assert_eq!(offer.price, dec!(10000000));
    /// assert!(offer.is_achievable());
    /// ```
    pub fn solve(
        &self,
        result: &RoiResult,
        desired_roi: Decimal,
    ) -> Option<CounterOffer> {
        if desired_roi <= Decimal::ZERO {
            warn!(%desired_roi, "desired roi not positive; counter offer skipped");
            return None;
        }

        let Some(price) = base_price_for_roi(
            result.net_annual_income,
            result.total_other_charges,
            desired_roi,
        ) else {
            warn!(%desired_roi, "counter offer solve overflowed; skipped");
            return None;
        };

        let offer = CounterOffer {
            price,
            roi: desired_roi,
        };
        info!(
            %desired_roi,
            %price,
            achievable = offer.is_achievable(),
            "counter offer solved"
        );
        Some(offer)
    }
}
