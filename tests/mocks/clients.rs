// Mock client implementations for testing
use typed_env::EnvClient;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Mock EnvClient that records every lookup
pub struct MockEnvClient {
    pub data: HashMap<String, String>,
    lookups: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockEnvClient {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn lookups(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lookups)
    }
}

impl EnvClient for MockEnvClient {
    fn get(&self, key: &str) -> Option<String> {
        self.lookups.lock().unwrap().push(key.to_string());
        self.data.get(key).cloned()
    }
}

// Default generator that counts its calls
#[derive(Clone)]
pub struct CountingGenerator {
    count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingGenerator {
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the call index as a string, so each call yields a different value.
    pub fn next(&self) -> String {
        self.count.fetch_add(1, Ordering::SeqCst).to_string()
    }

    pub fn calls(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
