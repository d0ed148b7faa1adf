// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[tokio::test]
async fn empty_until_first_value() {
    let (tx, rx) = watch::channel(None);
    let mut live = LiveValue::new(rx);
    assert_eq!(live.latest(), None::<u32>);

    tx.send_replace(Some(1));
    assert_eq!(live.get().await.unwrap(), 1);
}

#[tokio::test]
async fn late_reader_sees_latest_immediately() {
    let (tx, rx) = watch::channel(Some(1));
    tx.send_replace(Some(2));
    tx.send_replace(Some(3));

    let mut late = LiveValue::new(rx.clone());
    assert_eq!(late.latest(), Some(3));
    assert_eq!(late.get().await.unwrap(), 3);
}

#[tokio::test]
async fn changed_waits_for_next_value() {
    let (tx, rx) = watch::channel(Some(1));
    let mut live = LiveValue::new(rx);
    assert_eq!(live.get().await.unwrap(), 1);

    let waiter = tokio::spawn(async move { live.changed().await });
    tokio::task::yield_now().await;
    tx.send_replace(Some(5));

    assert_eq!(waiter.await.unwrap().unwrap(), 5);
}

#[tokio::test]
async fn get_fails_when_writer_dropped_empty() {
    let (tx, rx) = watch::channel::<Option<u32>>(None);
    let mut live = LiveValue::new(rx);
    drop(tx);
    assert!(matches!(live.get().await, Err(Error::Closed)));
}

#[tokio::test]
async fn get_returns_last_value_after_writer_dropped() {
    let (tx, rx) = watch::channel(Some(4));
    let mut live = LiveValue::new(rx);
    drop(tx);
    assert_eq!(live.get().await.unwrap(), 4);
    assert!(matches!(live.changed().await, Err(Error::Closed)));
}
