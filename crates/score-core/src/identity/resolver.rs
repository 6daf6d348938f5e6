//! Projection of a raw authentication response into an [`Identity`].
//!
//! The upstream webhook returns a schema-less record whose field names have
//! drifted over time, so every field is looked up through a short alias list
//! and only the fields an identity needs are read.

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::model::{
    AdminIdentity, CompanyIdentity, EmployeeIdentity, GroupIdentity, Identity, Role,
};
use crate::error::{Result, ScoreError};
use crate::fields::{lookup, optional_text, text};

const ACCESS_LEVEL_KEYS: &[&str] = &["access_level", "accessLevel", "nivel_acesso", "role"];
const JOB_TITLE_KEYS: &[&str] = &["position", "job_title", "jobTitle", "cargo"];
const ID_KEYS: &[&str] = &["id", "user_id", "userId"];
const NAME_KEYS: &[&str] = &["name", "nome"];
const EMAIL_KEYS: &[&str] = &["email"];
const COMPANY_NAME_KEYS: &[&str] = &["company_name", "companyName", "company", "empresa"];
const PHONE_KEYS: &[&str] = &["phone", "telefone"];
const COMPANY_CODE_KEYS: &[&str] = &["company_code", "companyCode", "codigo_empresa"];
const PHOTO_KEYS: &[&str] = &["photo_url", "photoUrl", "photo", "foto"];
const GROUP_NAME_KEYS: &[&str] = &["group_name", "groupName", "grupo"];
const MANAGED_COMPANIES_KEYS: &[&str] = &["managed_companies", "managedCompanies", "empresas"];

/// Resolves a raw login response into exactly one identity variant.
///
/// A response wrapped in an array is unwrapped to its first element.
///
/// # Compatibility shim
///
/// Employee records from the upstream API sometimes omit the access level.
/// When the discriminator is absent or blank and a job title is present, the
/// record resolves as an employee. No other role is inferred.
///
/// # Errors
///
/// Returns [`ScoreError::UnknownAccessLevel`] with the raw discriminator
/// (empty when missing) if the role cannot be determined. Missing optional
/// fields never fail; they default to empty strings or `None`.
pub fn resolve_identity(raw: &Value) -> Result<Identity> {
    let record = match raw {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
    .and_then(Value::as_object)
    .ok_or_else(|| ScoreError::unknown_access_level(""))?;

    let role = resolve_role(record)?;
    let id = text(record, ID_KEYS);
    let name = text(record, NAME_KEYS);
    let email = text(record, EMAIL_KEYS);

    let identity = match role {
        Role::Admin => Identity::Admin(AdminIdentity { id, name, email }),
        Role::Company => Identity::Company(CompanyIdentity {
            id,
            name,
            email,
            company_name: text(record, COMPANY_NAME_KEYS),
            phone: text(record, PHONE_KEYS),
            company_code: optional_text(record, COMPANY_CODE_KEYS),
            photo_url: optional_text(record, PHOTO_KEYS),
        }),
        Role::Employee => Identity::Employee(EmployeeIdentity {
            id,
            name,
            email,
            company_name: text(record, COMPANY_NAME_KEYS),
            phone: text(record, PHONE_KEYS),
            position: text(record, JOB_TITLE_KEYS),
            photo_url: optional_text(record, PHOTO_KEYS),
        }),
        Role::Group => Identity::Group(GroupIdentity {
            id,
            name,
            email,
            group_name: text(record, GROUP_NAME_KEYS),
            managed_companies: managed_companies(record),
        }),
    };

    Ok(identity)
}

/// Splits a comma-separated company list into a trimmed set.
///
/// Empty segments are dropped, so `""` yields an empty set.
pub fn parse_managed_companies(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn resolve_role(record: &Map<String, Value>) -> Result<Role> {
    let level = optional_text(record, ACCESS_LEVEL_KEYS);

    match level {
        Some(level) => Role::from_str(&level).map_err(|_| ScoreError::unknown_access_level(level)),
        None if optional_text(record, JOB_TITLE_KEYS).is_some() => Ok(Role::Employee),
        None => Err(ScoreError::unknown_access_level("")),
    }
}

fn managed_companies(record: &Map<String, Value>) -> BTreeSet<String> {
    match lookup(record, MANAGED_COMPANIES_KEYS) {
        Some(Value::String(s)) => parse_managed_companies(s),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => BTreeSet::new(),
    }
}
