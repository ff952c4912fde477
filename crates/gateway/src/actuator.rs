//! Operational endpoints: health, environment and refresh.
//!
//! New values for refreshable properties are staged with
//! `POST /actuator/env` and only become visible to request handlers after
//! `POST /actuator/refresh`, which reports the keys whose value changed.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};

/// Properties that can change without a restart
pub const REFRESHABLE_PROPERTIES: &[&str] = &["message"];

/// Live view of the gateway's properties.
#[derive(Debug)]
pub struct Environment {
    member_api: String,
    recommendation_api: String,
    message: RwLock<String>,
    staged: Mutex<BTreeMap<String, String>>,
}

impl Environment {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            member_api: config.member_api.clone(),
            recommendation_api: config.recommendation_api.clone(),
            message: RwLock::new(config.message.clone()),
            staged: Mutex::new(BTreeMap::new()),
        }
    }

    /// Current welcome message
    pub fn message(&self) -> String {
        self.message
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stage `value` for `name`; takes effect on the next [`refresh`](Self::refresh).
    pub fn stage(&self, name: &str, value: impl Into<String>) -> Result<()> {
        if !REFRESHABLE_PROPERTIES.contains(&name) {
            return Err(GatewayError::NotRefreshable(name.to_string()));
        }
        self.staged
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.into());
        Ok(())
    }

    /// Publish staged values and return the keys whose value changed.
    pub fn refresh(&self) -> Vec<String> {
        let staged = std::mem::take(&mut *self.staged.lock().unwrap_or_else(PoisonError::into_inner));
        let mut changed = Vec::new();

        for (name, value) in staged {
            // Only "message" is refreshable today
            if name == "message" {
                let mut message = self.message.write().unwrap_or_else(PoisonError::into_inner);
                if *message != value {
                    *message = value;
                    changed.push(name);
                }
            }
        }

        if !changed.is_empty() {
            info!("Refreshed properties: {:?}", changed);
        }
        changed
    }

    /// Effective properties plus anything staged but not yet refreshed
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        let mut properties = BTreeMap::new();
        properties.insert("member.api".to_string(), self.member_api.clone());
        properties.insert(
            "recommendation.api".to_string(),
            self.recommendation_api.clone(),
        );
        properties.insert("message".to_string(), self.message());

        EnvironmentSnapshot {
            properties,
            staged: self
                .staged
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub properties: BTreeMap<String, String>,
    pub staged: BTreeMap<String, String>,
}

/// Body of `POST /actuator/env`
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyUpdate {
    pub name: String,
    pub value: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

pub async fn show_env(State(env): State<Arc<Environment>>) -> Json<EnvironmentSnapshot> {
    Json(env.snapshot())
}

pub async fn stage_env(
    State(env): State<Arc<Environment>>,
    Json(update): Json<PropertyUpdate>,
) -> Result<Json<Value>> {
    env.stage(&update.name, update.value.clone())?;
    let mut staged = serde_json::Map::new();
    staged.insert(update.name, Value::String(update.value));
    Ok(Json(Value::Object(staged)))
}

pub async fn refresh(State(env): State<Arc<Environment>>) -> Json<Vec<String>> {
    Json(env.refresh())
}
