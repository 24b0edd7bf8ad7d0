use std::sync::Arc;

use snaplink_assigner::Assigner;
use snaplink_resolver::Resolver;

#[derive(Clone)]
pub struct AppState {
    assigner: Arc<dyn Assigner>,
    resolver: Arc<dyn Resolver>,
}

impl AppState {
    pub fn new(assigner: Arc<dyn Assigner>, resolver: Arc<dyn Resolver>) -> Self {
        Self { assigner, resolver }
    }

    pub fn assigner(&self) -> &dyn Assigner {
        self.assigner.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }
}
