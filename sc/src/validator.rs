//! Collection schema validation
//!
//! Every check runs for every collection; nothing short-circuits. Findings are appended
//! in discovery order: collection order, then check order within a collection, then
//! field order.

use log::{debug, info};

use crate::model::{CollectionDefinition, CollectionType, Schema};
use crate::report::ValidationReport;

/// Naming convention a collection is expected to follow
///
/// Violations are reported as warnings, never as errors.
#[derive(Debug, Clone, Copy)]
pub struct ConventionRule {
    /// Collection the rule applies to, matched exactly
    pub collection: &'static str,
    /// Relation fields the collection should define
    pub relation_fields: &'static [&'static str],
}

pub const CONVENTIONS: &[ConventionRule] = &[ConventionRule {
    collection: "notifications",
    relation_fields: &["receiver", "sender"],
}];

/// Validate collections in order and return every finding
pub fn validate(collections: &[CollectionDefinition]) -> ValidationReport {
    let mut report = ValidationReport::new(collections.len());

    for (index, collection) in collections.iter().enumerate() {
        let label = collection.label(index);
        info!("Validating collection: {}", label);

        check_required(&mut report, index, collection);
        check_type(&mut report, &label, collection);
        check_fields(&mut report, &label, collection);
        check_conventions(&mut report, collection);
    }

    debug!(
        "validate: {} collections, {} errors, {} warnings",
        report.collection_count(),
        report.error_count(),
        report.warning_count()
    );
    report
}

fn check_required(report: &mut ValidationReport, index: usize, collection: &CollectionDefinition) {
    let present = [
        ("id", collection.id.is_some()),
        ("name", collection.name.is_some()),
        ("type", collection.collection_type.is_some()),
        ("schema", collection.schema.is_present()),
    ];

    for (attr, ok) in present {
        if !ok {
            report.error(format!("Collection {}: Missing {}", index, attr));
        }
    }
}

fn check_type(report: &mut ValidationReport, label: &str, collection: &CollectionDefinition) {
    if collection.collection_type.as_ref().is_some_and(CollectionType::is_valid) {
        return;
    }
    let value = collection.type_text.as_deref().unwrap_or("undefined");
    debug!("check_type: {:?} not in {:?}", value, CollectionType::VALID);
    report.error(format!("Collection {}: Invalid type \"{}\"", label, value));
}

fn check_fields(report: &mut ValidationReport, label: &str, collection: &CollectionDefinition) {
    let fields = match &collection.schema {
        Schema::Fields(fields) => fields,
        Schema::NotAList => {
            report.error(format!("Collection {}: Schema must be a list of fields", label));
            return;
        }
        Schema::Missing => return,
    };

    for (position, field) in fields.iter().enumerate() {
        if field.name.is_none() {
            report.error(format!("Collection {}, field {}: Missing name", label, position));
        }
        if field.field_type.is_none() {
            report.error(format!("Collection {}, field {}: Missing type", label, position));
        }
        if field.is_relation() && field.collection_id.is_none() {
            report.error(format!(
                "Collection {}, field {}: Relation missing collectionId",
                label,
                field.label(position)
            ));
        }
    }
}

fn check_conventions(report: &mut ValidationReport, collection: &CollectionDefinition) {
    if !collection.schema.is_present() {
        return;
    }
    let Some(name) = collection.name.as_deref() else {
        return;
    };

    for rule in CONVENTIONS.iter().filter(|r| r.collection == name) {
        for field in rule.relation_fields {
            if !collection.schema.has_field(field) {
                report.warning(format!(
                    "{} collection: Missing {} relation field",
                    capitalize(rule.collection),
                    field
                ));
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
