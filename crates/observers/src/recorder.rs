use coilpack_core::{Bucket, Observer, ParamTuple, PhysicalEvaluator};
use coilpack_search::{Action, Event, Rejection};

/// What happened to one examined tuple.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted { bucket: Bucket, composite: f64 },
    Rejected(Rejection),

    /// The evaluator error, rendered with `Display`.
    Failed(String),
}

/// One entry of a [`Recorder`] trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub tuple: ParamTuple,
    pub outcome: Outcome,
}

/// Keeps an owned trace of every examined tuple, in examination order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<P> Observer<Event<'_, P>, Action> for Recorder
where
    P: PhysicalEvaluator,
{
    fn observe(&mut self, event: &Event<'_, P>) -> Option<Action> {
        let outcome = match event {
            Event::Accepted { candidate } => Outcome::Accepted {
                bucket: candidate.bucket(),
                composite: candidate.composite(),
            },
            Event::Rejected { reason, .. } => Outcome::Rejected(*reason),
            Event::EvaluationFailed { error, .. } => Outcome::Failed(error.to_string()),
        };
        self.records.push(Record {
            tuple: event.tuple(),
            outcome,
        });
        None
    }
}
