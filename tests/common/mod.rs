//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use launcher_client::config::ServerConfig;
use launcher_client::net::NetClient;
use launcher_client::state::Callbacks;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Net client pointed at `origin`.
pub fn net_client(origin: &str) -> NetClient {
    NetClient::new(&ServerConfig {
        origin: origin.to_string(),
    })
    .expect("Failed to build net client")
}

/// Counts how often each lifecycle callback fired.
#[derive(Default)]
pub struct CallbackCounts {
    pub loading: AtomicUsize,
    pub error: AtomicUsize,
    pub empty: AtomicUsize,
    pub data: AtomicUsize,
}

impl CallbackCounts {
    pub fn callbacks<T>(&self) -> Callbacks<'_, T> {
        Callbacks::new()
            .on_loading(|| {
                self.loading.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(|_| {
                self.error.fetch_add(1, Ordering::SeqCst);
            })
            .on_empty(|| {
                self.empty.fetch_add(1, Ordering::SeqCst);
            })
            .on_data(|_| {
                self.data.fetch_add(1, Ordering::SeqCst);
            })
    }

    pub fn loading(&self) -> usize {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn error(&self) -> usize {
        self.error.load(Ordering::SeqCst)
    }

    pub fn empty(&self) -> usize {
        self.empty.load(Ordering::SeqCst)
    }

    pub fn data(&self) -> usize {
        self.data.load(Ordering::SeqCst)
    }
}
