//! Reflected structured objects and their read operations

use super::{Reflect, Shape, TypeRef, Value};
use std::fmt;

/// How accessor names of an object map to property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Accessors follow the `get`/`is` prefix convention
    Bean,
    /// Plain data carrier; accessors share the component names exactly
    Record,
}

/// A zero-argument read operation exposed by an object, with the value it
/// returned at reflection time.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    declared_by: String,
    returns: TypeRef,
    value: Value,
}

impl Method {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type that declares the operation (the object's own type or an ancestor)
    pub fn declared_by(&self) -> &str {
        &self.declared_by
    }

    pub fn returns(&self) -> &TypeRef {
        &self.returns
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Debug, Clone)]
pub struct ObjectValue {
    type_name: String,
    kind: ObjectKind,
    ancestors: Vec<String>,
    methods: Vec<Method>,
    rendering: String,
}

impl ObjectValue {
    /// Start reflecting `instance` as an accessor-prefixed type
    pub fn bean<T: fmt::Debug + ?Sized>(instance: &T) -> ObjectBuilder {
        Self::builder(
            std::any::type_name::<T>(),
            ObjectKind::Bean,
            format!("{:?}", instance),
        )
    }

    /// Start reflecting `instance` as a plain data carrier
    pub fn record<T: fmt::Debug + ?Sized>(instance: &T) -> ObjectBuilder {
        Self::builder(
            std::any::type_name::<T>(),
            ObjectKind::Record,
            format!("{:?}", instance),
        )
    }

    pub fn builder(
        type_name: impl Into<String>,
        kind: ObjectKind,
        rendering: impl Into<String>,
    ) -> ObjectBuilder {
        ObjectBuilder {
            object: ObjectValue {
                type_name: type_name.into(),
                kind,
                ancestors: Vec::new(),
                methods: Vec::new(),
                rendering: rendering.into(),
            },
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Types this object inherits operations from, nearest first
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Own and inherited operations
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// `Debug` rendering of the reflected instance
    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    pub fn is_instance_of(&self, type_name: &str) -> bool {
        self.type_name == type_name || self.ancestors.iter().any(|a| a == type_name)
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.methods == other.methods
    }
}

/// Collects the read operations of an object being reflected.
///
/// Registering an operation under a name that already exists replaces it,
/// which is how an override shadows an inherited operation.
#[derive(Debug)]
pub struct ObjectBuilder {
    object: ObjectValue,
}

impl ObjectBuilder {
    /// Register an operation returning `value`
    pub fn accessor<P: Reflect>(self, name: &str, value: &P) -> Self {
        self.computed(name, P::type_ref(), value.reflect())
    }

    /// Register an operation that may return null (`None`)
    pub fn nullable<P: Reflect>(self, name: &str, value: &Option<P>) -> Self {
        let reflected = value.as_ref().map_or(Value::Null, Reflect::reflect);
        self.computed(name, P::type_ref(), reflected)
    }

    /// Register an operation that returns nothing
    pub fn void(self, name: &str) -> Self {
        self.computed(name, TypeRef::of::<()>(Shape::Void), Value::Null)
    }

    /// Register an operation with an explicit declared type and value
    pub fn computed(mut self, name: &str, returns: TypeRef, value: Value) -> Self {
        let method = Method {
            name: name.to_string(),
            declared_by: self.object.type_name.clone(),
            returns,
            value,
        };
        match self.object.methods.iter_mut().find(|m| m.name == name) {
            Some(existing) => *existing = method,
            None => self.object.methods.push(method),
        }
        self
    }

    /// Inherit the operations of `parent` that are not declared here
    pub fn inherit(mut self, parent: &dyn Reflect) -> Self {
        if let Value::Object(parent) = parent.reflect() {
            self.object.ancestors.push(parent.type_name);
            self.object.ancestors.extend(parent.ancestors);
            for method in parent.methods {
                if self.object.method(&method.name).is_none() {
                    self.object.methods.push(method);
                }
            }
        }
        self
    }

    pub fn finish(self) -> ObjectValue {
        self.object
    }

    pub fn build(self) -> Value {
        Value::Object(self.object)
    }
}

impl From<ObjectBuilder> for Value {
    fn from(builder: ObjectBuilder) -> Self {
        builder.build()
    }
}
