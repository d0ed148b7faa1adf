// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for client tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use egg_core::Config;
use tokio::sync::Semaphore;

use crate::transport::{Body, Request, Transport, TransportError, TransportResult};

#[derive(Debug, Clone)]
pub enum Reply {
    Ok(String),
    Status(u16),
    Refused,
}

#[derive(Default)]
struct MockState {
    /// Replies per route. The last reply of a route is reused once the
    /// queue is down to it.
    replies: HashMap<String, VecDeque<Reply>>,
    requests: Vec<Request>,
    holds: HashMap<String, Arc<Semaphore>>,
}

/// Mock transport for testing without a device.
///
/// Clones share state, so a test keeps one clone to script replies and
/// inspect requests after handing the other to a client.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for `route` (e.g. `"GET api/config"`).
    pub fn reply(&self, route: &str, reply: Reply) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .entry(route.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn ok(&self, route: &str, body: &str) -> &Self {
        self.reply(route, Reply::Ok(body.to_string()))
    }

    /// Makes requests to `route` wait until [`MockTransport::release`].
    pub fn hold(&self, route: &str) {
        self.state
            .lock()
            .unwrap()
            .holds
            .insert(route.to_string(), Arc::new(Semaphore::new(0)));
    }

    /// Lets one held request to `route` proceed.
    pub fn release(&self, route: &str) {
        if let Some(sem) = self.state.lock().unwrap().holds.get(route) {
            sem.add_permits(1);
        }
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Number of requests sent to `route`.
    pub fn count(&self, route: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.route() == route)
            .count()
    }

    /// Configs posted to `api/config`, in order.
    pub fn saved_configs(&self) -> Vec<Config> {
        self.requests()
            .into_iter()
            .filter(|r| r.route() == "POST api/config")
            .map(|r| match r.body {
                Body::Json(value) => serde_json::from_value(value).unwrap(),
                other => unreachable!("unexpected config body {:?}", other),
            })
            .collect()
    }

    fn next_reply(&self, route: &str) -> Option<Reply> {
        let mut state = self.state.lock().unwrap();
        let queue = state.replies.get_mut(route)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = TransportResult<String>> + Send + '_>> {
        Box::pin(async move {
            let route = request.route();
            let hold = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.holds.get(&route).cloned()
            };
            if let Some(sem) = hold {
                sem.acquire().await.unwrap().forget();
            }
            match self.next_reply(&route) {
                Some(Reply::Ok(body)) => Ok(body),
                Some(Reply::Status(code)) => Err(TransportError::Status {
                    code,
                    body: String::new(),
                }),
                Some(Reply::Refused) => Err(TransportError::Connection("refused".into())),
                None => Err(TransportError::Status {
                    code: 404,
                    body: format!("no reply scripted for {}", route),
                }),
            }
        })
    }
}

/// Lets spawned tasks run until they block.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Advances paused time by `ms` and lets tasks react.
pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}
