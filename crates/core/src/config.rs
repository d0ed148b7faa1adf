// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drawing configuration stored on the device.
//!
//! A [`Config`] is always complete. Anything read from the device or submitted
//! as an edit arrives as a [`ConfigPatch`] and is overlaid on the default
//! record, so fields missing from older firmware or partial edits fall back to
//! [`Config::default`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How overlapping SVG layers are resolved before segmenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerResolveType {
    /// Draw every layer as-is.
    #[default]
    None,
    /// Hide segments covered by strokes of upper layers.
    Stroke,
    /// Hide segments covered by fills of upper layers.
    Fill,
}

impl LayerResolveType {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerResolveType::None => "none",
            LayerResolveType::Stroke => "stroke",
            LayerResolveType::Fill => "fill",
        }
    }
}

impl fmt::Display for LayerResolveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LayerResolveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LayerResolveType::None),
            "stroke" => Ok(LayerResolveType::Stroke),
            "fill" => Ok(LayerResolveType::Fill),
            _ => Err(Error::InvalidLayerResolveType(s.to_string())),
        }
    }
}

/// Drawing and printing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Horizontal scaling factor.
    pub h_scale: f64,
    /// Vertical scaling factor.
    pub v_scale: f64,
    /// Vertical offset applied after scaling.
    pub v_offset: f64,
    /// Reorder segments to shorten pen-up travel.
    pub optimize_travel: bool,
    /// Allow segments to be drawn in reverse when that shortens travel.
    pub reverse_segments: bool,
    /// Drop points closer than `simplify_threshold`.
    pub simplify_segments: bool,
    pub simplify_threshold: f64,
    pub layer_resolve_type: LayerResolveType,
    /// Join segments whose gap is below `min_travel_distance`.
    pub merge_segments: bool,
    pub min_travel_distance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            h_scale: 1.0,
            v_scale: 1.0,
            v_offset: 0.0,
            optimize_travel: true,
            reverse_segments: true,
            simplify_segments: true,
            simplify_threshold: 0.04,
            layer_resolve_type: LayerResolveType::None,
            merge_segments: true,
            min_travel_distance: 0.11,
        }
    }
}

impl Config {
    /// Builds a complete record by overlaying `patch` on the defaults.
    pub fn from_patch(patch: &ConfigPatch) -> Self {
        Config::default().merged(patch)
    }

    /// Returns a copy of `self` with every field present in `patch` replaced.
    pub fn merged(mut self, patch: &ConfigPatch) -> Self {
        if let Some(v) = patch.h_scale {
            self.h_scale = v;
        }
        if let Some(v) = patch.v_scale {
            self.v_scale = v;
        }
        if let Some(v) = patch.v_offset {
            self.v_offset = v;
        }
        if let Some(v) = patch.optimize_travel {
            self.optimize_travel = v;
        }
        if let Some(v) = patch.reverse_segments {
            self.reverse_segments = v;
        }
        if let Some(v) = patch.simplify_segments {
            self.simplify_segments = v;
        }
        if let Some(v) = patch.simplify_threshold {
            self.simplify_threshold = v;
        }
        if let Some(v) = patch.layer_resolve_type {
            self.layer_resolve_type = v;
        }
        if let Some(v) = patch.merge_segments {
            self.merge_segments = v;
        }
        if let Some(v) = patch.min_travel_distance {
            self.min_travel_distance = v;
        }
        self
    }

    /// Parses a device response, filling absent fields from the defaults.
    ///
    /// Fields are decoded one at a time. A field the client cannot decode
    /// (a layer mode from newer firmware, a mistyped number) keeps its default
    /// instead of discarding the rest of the record.
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut config = Config::default();
        for (key, value) in fields {
            let mut single = serde_json::Map::new();
            single.insert(key, value);
            if let Ok(patch) = serde_json::from_value::<ConfigPatch>(single.into()) {
                config = config.merged(&patch);
            }
        }
        Ok(config)
    }
}

/// A possibly partial [`Config`], as sent by the device or by an editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_travel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_segments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_segments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_resolve_type: Option<LayerResolveType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_segments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_travel_distance: Option<f64>,
}

impl From<Config> for ConfigPatch {
    fn from(config: Config) -> Self {
        ConfigPatch {
            h_scale: Some(config.h_scale),
            v_scale: Some(config.v_scale),
            v_offset: Some(config.v_offset),
            optimize_travel: Some(config.optimize_travel),
            reverse_segments: Some(config.reverse_segments),
            simplify_segments: Some(config.simplify_segments),
            simplify_threshold: Some(config.simplify_threshold),
            layer_resolve_type: Some(config.layer_resolve_type),
            merge_segments: Some(config.merge_segments),
            min_travel_distance: Some(config.min_travel_distance),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
