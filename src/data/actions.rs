//! Action-set boundary parsing
//!
//! Normalizes the policy layer's JSON actions into typed selections so the
//! pricing engine never inspects payload shapes. Key-horse markets keep
//! their historical tags (`quinella_wheel`, `exacta_wheel`) and their legacy
//! payload encodings are accepted here, once, at the boundary.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::KeibaError;
use crate::models::{ActionSet, BetType, RaceActions, Selection};

/// Parse `{race_id: {tag: payload}}` JSON into a typed action set.
///
/// Unknown tags are rejected up front rather than silently skipped at
/// pricing time.
pub fn parse_action_set(json: &str) -> Result<ActionSet, KeibaError> {
    let raw: BTreeMap<String, BTreeMap<String, Value>> = serde_json::from_str(json)?;

    let mut actions = ActionSet::new();
    for (race_id, entries) in raw {
        let mut race_actions = RaceActions::new();
        for (tag, payload) in entries {
            let (bet_type, wheel) = parse_tag(&tag)?;
            let selection = if wheel {
                wheel_selection(&race_id, &tag, &payload)
            } else {
                Selection::Numbers(number_list(bet_type, &payload)?)
            };
            race_actions.insert(bet_type, selection);
        }
        actions.insert(race_id, race_actions);
    }
    Ok(actions)
}

/// Read and parse an action-set JSON file.
pub fn load_action_set<P: AsRef<Path>>(path: P) -> Result<ActionSet, KeibaError> {
    parse_action_set(&fs::read_to_string(path)?)
}

fn parse_tag(tag: &str) -> Result<(BetType, bool), KeibaError> {
    match tag {
        "quinella_wheel" => Ok((BetType::Quinella, true)),
        "exacta_wheel" => Ok((BetType::Exacta, true)),
        _ => Ok((tag.parse()?, false)),
    }
}

fn number_list(bet_type: BetType, payload: &Value) -> Result<Vec<u8>, KeibaError> {
    let items = payload
        .as_array()
        .ok_or_else(|| KeibaError::InvalidSelection {
            bet_type,
            reason: "expected a list of competitor numbers".to_string(),
        })?;
    items
        .iter()
        .map(|item| {
            as_number(item).ok_or_else(|| KeibaError::InvalidSelection {
                bet_type,
                reason: format!("expected a competitor number, got {item}"),
            })
        })
        .collect()
}

/// Best-effort normalization of the historical wheel payload shapes:
/// `{anchors/anchor, partners}`, `[anchor(s), [partners]]` and the flat
/// `[anchor, partners...]` list. Anything else degrades to an anchor set
/// with no partners, which prices to zero tickets.
fn wheel_selection(race_id: &str, tag: &str, payload: &Value) -> Selection {
    if let Value::Object(map) = payload {
        let anchors = map
            .get("anchors")
            .or_else(|| map.get("anchor"))
            .map(number_set)
            .unwrap_or_default();
        let partners = map.get("partners").map(number_set).unwrap_or_default();
        return Selection::Wheel { anchors, partners };
    }

    if let Value::Array(items) = payload {
        if items.len() == 2 && items[1].is_array() {
            return Selection::Wheel {
                anchors: number_set(&items[0]),
                partners: number_set(&items[1]),
            };
        }
        let numbers: Vec<u8> = items.iter().filter_map(as_number).collect();
        if !numbers.is_empty() && numbers.len() == items.len() {
            return Selection::Wheel {
                anchors: vec![numbers[0]],
                partners: numbers[1..].to_vec(),
            };
        }
    }

    if let Some(anchor) = as_number(payload) {
        return Selection::Wheel {
            anchors: vec![anchor],
            partners: Vec::new(),
        };
    }

    warn!(race_id, tag, "unrecognized wheel payload, treating as anchor-only");
    Selection::Wheel {
        anchors: number_set(payload),
        partners: Vec::new(),
    }
}

/// Scalar-or-list of competitor numbers.
fn number_set(value: &Value) -> Vec<u8> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_number).collect(),
        other => as_number(other).into_iter().collect(),
    }
}

fn as_number(value: &Value) -> Option<u8> {
    value.as_u64().and_then(|n| u8::try_from(n).ok())
}
