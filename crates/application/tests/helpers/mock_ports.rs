#![allow(dead_code)]

use async_trait::async_trait;
use rpp_application::ports::{ControllerResolver, PreferenceAdvertiser};
use rpp_domain::{
    ControllerAddress, ControllerLookup, DomainError, PreferenceMessage, ReverseDnsName,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockControllerResolver {
    responses: Arc<Mutex<HashMap<String, Result<ControllerLookup, DomainError>>>>,
    queries: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockControllerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_controller(&self, reverse_name: &str, controller: &str) {
        let addr = ControllerAddress::parse(controller).unwrap();
        self.responses
            .lock()
            .unwrap()
            .insert(reverse_name.to_string(), Ok(ControllerLookup::Found(addr)));
    }

    pub fn set_error(&self, reverse_name: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(reverse_name.to_string(), Err(error));
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ControllerResolver for MockControllerResolver {
    async fn resolve(
        &self,
        reverse_name: &ReverseDnsName,
        capacity: usize,
    ) -> Result<ControllerLookup, DomainError> {
        self.queries
            .lock()
            .unwrap()
            .push((reverse_name.to_string(), capacity));

        self.responses
            .lock()
            .unwrap()
            .get(reverse_name.as_str())
            .cloned()
            .unwrap_or(Ok(ControllerLookup::NotFound))
    }
}

#[derive(Clone, Default)]
pub struct MockPreferenceAdvertiser {
    sent: Arc<Mutex<Vec<(String, PreferenceMessage)>>>,
    failure: Arc<Mutex<Option<DomainError>>>,
}

impl MockPreferenceAdvertiser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: DomainError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn sent(&self) -> Vec<(String, PreferenceMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PreferenceAdvertiser for MockPreferenceAdvertiser {
    async fn advertise(
        &self,
        controller: &ControllerAddress,
        message: &PreferenceMessage,
    ) -> Result<(), DomainError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.sent
            .lock()
            .unwrap()
            .push((controller.to_string(), message.clone()));
        Ok(())
    }
}
