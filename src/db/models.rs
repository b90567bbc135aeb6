//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A stored key-value row.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::kv_entries)]
pub struct KvEntry {
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}

/// Insertable row for creating or replacing an entry.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::kv_entries)]
pub struct NewKvEntry<'a> {
    key: &'a str,
    value: &'a str,
    updated_at: NaiveDateTime,
}
