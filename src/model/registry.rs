//! Record type definition
//!
//! A record type is declared once through [`RecordTypeBuilder`]. `build()`
//! splits field descriptors out of the declared members, names them, and
//! freezes the result. Nothing about the type changes afterwards except the
//! accepted values in its [`UniqueStore`].

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::record::Record;
use crate::field::{json_type_name, Field, UniqueStore, ValidationError, ValidationResult};
use crate::observability::Event;

/// One declared member of a record type
#[derive(Debug)]
pub enum Member {
    /// Validated field
    Field(Field),
    /// Plain class-level attribute, readable from every record
    Attr(Value),
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Member::Field(field)
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Member::Attr(value)
    }
}

/// Collects the members of a record type in declaration order.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: String,
    members: IndexMap<String, Member>,
}

impl RecordTypeBuilder {
    /// Declares a member. Redeclaring a name replaces the earlier member in
    /// its original position.
    pub fn member(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.members.insert(name.into(), member.into());
        self
    }

    /// Declares a field
    pub fn field(self, name: impl Into<String>, field: Field) -> Self {
        self.member(name, field)
    }

    /// Declares a plain class-level attribute
    pub fn attr(self, name: impl Into<String>, value: Value) -> Self {
        self.member(name, value)
    }

    /// Builds the immutable record type.
    ///
    /// Every `Member::Field` moves into the field table and is given its
    /// declared name; the remaining members become plain attributes.
    pub fn build(self) -> Arc<RecordType> {
        let mut fields = IndexMap::new();
        let mut attrs = IndexMap::new();

        for (name, member) in self.members {
            match member {
                Member::Field(field) => {
                    fields.insert(name, field);
                }
                Member::Attr(value) => {
                    attrs.insert(name, value);
                }
            }
        }

        for (name, field) in fields.iter_mut() {
            field.assign_name(name);
            debug!(
                event = Event::FieldRegistered.as_str(),
                record_type = %self.name,
                field = %name,
                kind = field.kind().type_name(),
                unique = field.is_unique(),
            );
        }

        info!(
            event = Event::RecordTypeDefined.as_str(),
            record_type = %self.name,
            fields = fields.len(),
            attrs = attrs.len(),
        );

        Arc::new(RecordType {
            name: self.name,
            fields,
            attrs,
            unique_store: UniqueStore::new(),
        })
    }
}

/// A declared record shape: named fields plus plain attributes.
#[derive(Debug)]
pub struct RecordType {
    name: String,
    fields: IndexMap<String, Field>,
    attrs: IndexMap<String, Value>,
    unique_store: UniqueStore,
}

impl RecordType {
    /// Starts declaring a record type.
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Plain class-level attribute
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Accepted values of this type's unique fields
    pub fn unique_store(&self) -> &UniqueStore {
        &self.unique_store
    }

    /// Constructs a record from named values.
    ///
    /// See [`Record::new`].
    pub fn create<I, K>(self: &Arc<Self>, values: I) -> ValidationResult<Record>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Record::new(Arc::clone(self), values)
    }

    /// Constructs a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` on field `$root` if `document` is not an
    /// object, otherwise whatever [`Record::new`] returns.
    pub fn create_from_json(self: &Arc<Self>, document: &Value) -> ValidationResult<Record> {
        let obj = document.as_object().ok_or_else(|| {
            ValidationError::type_mismatch(Some("$root"), "an object", json_type_name(document))
        })?;

        self.create(obj.iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_type() -> Arc<RecordType> {
        RecordType::builder("User")
            .field("username", Field::char(255).unique())
            .attr("table", json!("users"))
            .field("email", Field::char(100).unique())
            .build()
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let user = user_type();
        let names: Vec<&str> = user.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["username", "email"]);
    }

    #[test]
    fn test_build_assigns_names() {
        let user = user_type();
        for (name, field) in user.fields() {
            assert_eq!(field.name(), Some(name));
        }
    }

    #[test]
    fn test_fields_are_not_plain_attrs() {
        let user = user_type();
        assert!(user.attr("username").is_none());
        assert!(user.field("table").is_none());
        assert_eq!(user.attr("table"), Some(&json!("users")));
    }

    #[test]
    fn test_redeclared_member_replaces_in_place() {
        let ty = RecordType::builder("T")
            .field("a", Field::char(5))
            .field("b", Field::integer())
            .field("a", Field::boolean())
            .build();

        let fields: Vec<(&str, &Field)> = ty.fields().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "a");
        assert_eq!(fields[0].1.kind(), crate::field::FieldKind::Boolean);
    }

    #[test]
    fn test_field_redeclared_as_attr_leaves_field_table() {
        let ty = RecordType::builder("T")
            .field("a", Field::char(5))
            .attr("a", json!(1))
            .build();

        assert!(ty.field("a").is_none());
        assert_eq!(ty.attr("a"), Some(&json!(1)));
    }

    #[test]
    fn test_create_from_json_requires_object() {
        let user = user_type();
        let err = user.create_from_json(&json!(["john"])).unwrap_err();
        assert_eq!(err.field(), Some("$root"));
        assert!(err.message().contains("an object"));
    }
}
