//! Hand-off of a finished session to a report renderer.
//!
//! Rendering itself (PDF, CSV, ...) lives outside this crate behind the
//! [`ReportExporter`] trait. Exporters only ever see a shared borrow of the
//! session, so they cannot change engine state.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::{Session, WizardStep};

/// Boxed error returned by exporter implementations.
pub type ExportError = Box<dyn StdError + Send + Sync>;

/// Which report to render from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    /// Inputs, income breakdown, investment and ROI, plus the cash flow.
    #[default]
    Standard,
    /// The counter-offer price and ROI against the same income figures.
    CounterOffer,
}

impl fmt::Display for ReportKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::CounterOffer => write!(f, "counter-offer"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("nothing to report yet; the wizard is at step {0}")]
    NotCalculated(WizardStep),

    #[error("no counter offer has been calculated")]
    MissingCounterOffer,

    #[error("{kind} report export failed")]
    Export {
        kind: ReportKind,
        #[source]
        source: ExportError,
    },
}

/// Renders a completed session.
pub trait ReportExporter {
    fn export(
        &self,
        session: &Session,
        kind: ReportKind,
    ) -> Result<(), ExportError>;
}

/// Checks the session can produce `kind` and passes it to `exporter`.
///
/// # Errors
///
/// * [`ReportError::NotCalculated`] unless the session is at the results step.
/// * [`ReportError::MissingCounterOffer`] for a counter-offer report before
///   one has been solved.
/// * [`ReportError::Export`] wrapping any exporter failure.
pub fn export_report<E>(
    session: &Session,
    exporter: &E,
    kind: ReportKind,
) -> Result<(), ReportError>
where
    E: ReportExporter + ?Sized,
{
    if session.step() != WizardStep::Results {
        return Err(ReportError::NotCalculated(session.step()));
    }
    if kind == ReportKind::CounterOffer && session.counter_offer().is_none() {
        return Err(ReportError::MissingCounterOffer);
    }

    exporter
        .export(session, kind)
        .map_err(|source| ReportError::Export { kind, source })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::CounterOffer;

    /// Records what it was asked to export.
    #[derive(Default)]
    struct RecordingExporter {
        exported: RefCell<Vec<ReportKind>>,
        fail: bool,
    }

    impl ReportExporter for RecordingExporter {
        fn export(
            &self,
            _session: &Session,
            kind: ReportKind,
        ) -> Result<(), ExportError> {
            if self.fail {
                return Err("disk full".into());
            }
            self.exported.borrow_mut().push(kind);
            Ok(())
        }
    }

    fn finished_session() -> Session {
        Session {
            step: WizardStep::Results,
            ..Default::default()
        }
    }

    #[test]
    fn standard_report_is_exported_from_results_step() {
        let exporter = RecordingExporter::default();

        export_report(&finished_session(), &exporter, ReportKind::Standard).unwrap();

        assert_eq!(*exporter.exported.borrow(), vec![ReportKind::Standard]);
    }

    #[test]
    fn export_before_results_is_refused() {
        let session = Session {
            step: WizardStep::Financials,
            ..Default::default()
        };

        let result = export_report(&session, &RecordingExporter::default(), ReportKind::Standard);

        assert!(matches!(
            result,
            Err(ReportError::NotCalculated(WizardStep::Financials))
        ));
    }

    #[test]
    fn counter_offer_report_requires_counter_offer() {
        let exporter = RecordingExporter::default();
        let result = export_report(&finished_session(), &exporter, ReportKind::CounterOffer);
        assert!(matches!(result, Err(ReportError::MissingCounterOffer)));

        let session = Session {
            counter_offer: Some(CounterOffer {
                price: dec!(9000000),
                roi: dec!(11),
            }),
            ..finished_session()
        };
        export_report(&session, &exporter, ReportKind::CounterOffer).unwrap();
        assert_eq!(*exporter.exported.borrow(), vec![ReportKind::CounterOffer]);
    }

    #[test]
    fn exporter_failure_is_wrapped() {
        let exporter = RecordingExporter {
            fail: true,
            ..Default::default()
        };

        let err = export_report(&finished_session(), &exporter, ReportKind::Standard).unwrap_err();

        assert_eq!(err.to_string(), "standard report export failed");
        assert_eq!(
            StdError::source(&err).map(|s| s.to_string()),
            Some("disk full".to_string())
        );
    }
}
