use std::collections::{HashMap, HashSet};

use crate::types::Integration;
use crate::validate::rules::{auth, request};
use crate::validate::validator::Validator;

pub(crate) fn validate_integration(v: &mut Validator, integration: &Integration) {
    if integration.name.trim().is_empty() {
        v.push("$.name", "must not be empty");
    }

    if integration.requests.is_empty() {
        v.push("$.requests", "must have at least one entry");
    }

    if let Some(auth_config) = &integration.authentication {
        auth::validate_authentication(v, auth_config, "$.authentication");
    }

    let mut ids = HashSet::<&str>::new();
    let mut orders = HashMap::<u32, usize>::new();
    for (idx, req) in integration.requests.iter().enumerate() {
        let path = format!("$.requests[{idx}]");

        if !ids.insert(&req.id) {
            v.push(format!("{path}.id"), "must be unique");
        }
        if let Some(first) = orders.insert(req.order, idx) {
            v.push(
                format!("{path}.order"),
                format!(
                    "duplicate order value {} (also used by $.requests[{first}])",
                    req.order
                ),
            );
        }

        request::validate_request(v, req, &path);
    }

    // dependsOn is checked after all ids are known; forward references are fine.
    for (idx, req) in integration.requests.iter().enumerate() {
        for (didx, dep) in req.depends_on.iter().enumerate() {
            let dep_path = format!("$.requests[{idx}].dependsOn[{didx}]");
            if dep == &req.id {
                v.push(dep_path, "must not reference the request itself");
            } else if !ids.contains(dep.as_str()) {
                v.push(
                    dep_path,
                    "must reference the id of another request in this integration",
                );
            }
        }
    }
}
