use numlab_core::ScalarFunction;
use tracing::info;

use super::{Record, Solution, Status, Warning};

/// Bookkeeping accumulated over a run.
pub(super) struct State {
    x0: f64,
    eps: f64,
    q0: f64,
    warnings: Vec<Warning>,
    log: Vec<Record>,
    iterates: Vec<f64>,
}

impl State {
    pub(super) fn new(x0: f64, eps: f64, q0: f64, warnings: Vec<Warning>) -> Self {
        Self {
            x0,
            eps,
            q0,
            warnings,
            log: Vec::new(),
            iterates: Vec::new(),
        }
    }

    /// Appends a completed step and the iterate it produced.
    pub(super) fn push(&mut self, record: Record, next: f64) {
        self.log.push(record);
        self.iterates.push(next);
    }

    pub(super) fn into_solution<F: ScalarFunction + ?Sized>(
        self,
        f: &F,
        status: Status,
        root: f64,
    ) -> Solution {
        let residual = f.call(root);
        info!(root, residual, iters = self.log.len(), ?status, "modified Newton finished");

        Solution {
            status,
            root,
            residual,
            iters: self.log.len(),
            step: self.log.last().map(|record| record.step),
            x0: self.x0,
            eps: self.eps,
            q0: self.q0,
            warnings: self.warnings,
            log: self.log,
            iterates: self.iterates,
        }
    }
}
