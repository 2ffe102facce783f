use crate::ports::ControllerResolver;
use rpp_domain::{
    ControllerLookup, DomainError, Prefix, ReverseDnsName, DEFAULT_NAME_CAPACITY,
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ControllerResolution {
    pub reverse_name: ReverseDnsName,
    pub lookup: ControllerLookup,
}

pub struct ResolveControllerUseCase {
    resolver: Arc<dyn ControllerResolver>,
    capacity: usize,
}

impl ResolveControllerUseCase {
    pub fn new(resolver: Arc<dyn ControllerResolver>) -> Self {
        Self {
            resolver,
            capacity: DEFAULT_NAME_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub async fn execute(&self, prefix: &Prefix) -> Result<ControllerResolution, DomainError> {
        let reverse_name = ReverseDnsName::from_address(prefix.address())?;

        debug!(
            prefix = %prefix,
            reverse_name = %reverse_name,
            family = %reverse_name.family(),
            "Resolving RDE controller"
        );

        let lookup = self.resolver.resolve(&reverse_name, self.capacity).await?;

        match &lookup {
            ControllerLookup::Found(controller) => {
                info!(prefix = %prefix, controller = %controller, "RDE controller resolved");
            }
            ControllerLookup::NotFound => {
                info!(prefix = %prefix, reverse_name = %reverse_name, "No RDE record");
            }
        }

        Ok(ControllerResolution {
            reverse_name,
            lookup,
        })
    }
}
