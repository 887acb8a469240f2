use super::{Data, Files, Flow, Stack, Val, Var};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

/// ## Interpreter state shared by every statement
///
/// Variables, DATA, open files and the print column survive from one
/// line to the next. `reset` puts everything but the DATA lines and the
/// random generator back to the start-of-run state.

#[derive(Debug)]
pub struct Context {
    pub(crate) var: Var,
    pub(crate) data: Data,
    pub(crate) files: Files,
    pub(crate) column: usize,
    pub(crate) last_flow: Option<Flow>,
    pub(crate) rng: StdRng,
    pub(crate) operands: Stack<Val>,
}

impl Default for Context {
    fn default() -> Self {
        Context::new(None)
    }
}

impl Context {
    pub fn new(seed: Option<u64>) -> Context {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Context {
            var: Var::new(),
            data: Data::new(),
            files: Files::new(),
            column: 0,
            last_flow: None,
            rng,
            operands: Stack::new("EXPRESSION TOO COMPLEX"),
        }
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn reset(&mut self) {
        self.var.clear();
        self.data.restore(0);
        if let Err(error) = self.files.close_all() {
            warn!(%error, "closing files left open by the last run");
        }
        self.column = 0;
        self.last_flow = None;
        self.operands.clear();
    }
}
