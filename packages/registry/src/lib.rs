//! # Pageforge Registry
//!
//! The fixed catalog of renderable primitives.
//!
//! The registry maps a type name to the primitive's accepted properties
//! and their defaults. It is populated once as static data, immutable
//! shared state with no reference held by component nodes — nodes are
//! matched against it by type name at render time (late binding: a
//! document authored against one registry version still renders against
//! a newer one).
//!
//! `lookup` is pure and total; an unknown name returns `None`, an
//! ordinary value the renderer treats as a recoverable per-node
//! condition.

use pageforge_document::{PropertyKind, PropertyValue};

/// The closed set of renderable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Button,
    Heading,
    Paragraph,
    Image,
    Container,
    Section,
    Row,
    Column,
    Divider,
    Spacer,
}

impl Primitive {
    pub const ALL: [Primitive; 10] = [
        Primitive::Button,
        Primitive::Heading,
        Primitive::Paragraph,
        Primitive::Image,
        Primitive::Container,
        Primitive::Section,
        Primitive::Row,
        Primitive::Column,
        Primitive::Divider,
        Primitive::Spacer,
    ];

    /// Parse a type name. Names are exact and case-sensitive, matching
    /// the palette labels.
    pub fn parse(name: &str) -> Option<Primitive> {
        match name {
            "Button" => Some(Primitive::Button),
            "Heading" => Some(Primitive::Heading),
            "Paragraph" => Some(Primitive::Paragraph),
            "Image" => Some(Primitive::Image),
            "Container" => Some(Primitive::Container),
            "Section" => Some(Primitive::Section),
            "Row" => Some(Primitive::Row),
            "Column" => Some(Primitive::Column),
            "Divider" => Some(Primitive::Divider),
            "Spacer" => Some(Primitive::Spacer),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Button => "Button",
            Primitive::Heading => "Heading",
            Primitive::Paragraph => "Paragraph",
            Primitive::Image => "Image",
            Primitive::Container => "Container",
            Primitive::Section => "Section",
            Primitive::Row => "Row",
            Primitive::Column => "Column",
            Primitive::Divider => "Divider",
            Primitive::Spacer => "Spacer",
        }
    }

    /// Whether the primitive renders its children as content.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            Primitive::Container | Primitive::Section | Primitive::Row | Primitive::Column
        )
    }
}

/// Default value for a declared property, storable as static data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Str(&'static str),
    Num(f64),
    Bool(bool),
}

impl DefaultValue {
    pub fn to_value(self) -> PropertyValue {
        match self {
            DefaultValue::Str(s) => PropertyValue::Str(s.to_string()),
            DefaultValue::Num(n) => PropertyValue::Num(n),
            DefaultValue::Bool(b) => PropertyValue::Bool(b),
        }
    }

    pub fn kind(self) -> PropertyKind {
        match self {
            DefaultValue::Str(_) => PropertyKind::Str,
            DefaultValue::Num(_) => PropertyKind::Num,
            DefaultValue::Bool(_) => PropertyKind::Bool,
        }
    }
}

/// One declared property of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// None means the property has no default and is simply omitted
    /// when unset (e.g. Image dimensions).
    pub default: Option<DefaultValue>,
}

const fn prop(name: &'static str, kind: PropertyKind, default: Option<DefaultValue>) -> PropertySpec {
    PropertySpec { name, kind, default }
}

/// A primitive's registry entry: its accepted properties and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryEntry {
    pub primitive: Primitive,
    pub props: &'static [PropertySpec],
}

impl RegistryEntry {
    pub fn type_name(&self) -> &'static str {
        self.primitive.name()
    }

    pub fn prop(&self, name: &str) -> Option<&'static PropertySpec> {
        self.props.iter().find(|spec| spec.name == name)
    }

    pub fn default_str(&self, name: &str) -> Option<&'static str> {
        match self.prop(name)?.default? {
            DefaultValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn default_num(&self, name: &str) -> Option<f64> {
        match self.prop(name)?.default? {
            DefaultValue::Num(n) => Some(n),
            _ => None,
        }
    }

    pub fn default_bool(&self, name: &str) -> Option<bool> {
        match self.prop(name)?.default? {
            DefaultValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Declared defaults, in declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&'static str, PropertyValue)> {
        self.props
            .iter()
            .filter_map(|spec| spec.default.map(|d| (spec.name, d.to_value())))
    }
}

static ENTRIES: &[RegistryEntry] = &[
    RegistryEntry {
        primitive: Primitive::Button,
        props: &[
            prop("text", PropertyKind::Str, Some(DefaultValue::Str("Button"))),
            prop("variant", PropertyKind::Str, Some(DefaultValue::Str("primary"))),
            prop("disabled", PropertyKind::Bool, Some(DefaultValue::Bool(false))),
        ],
    },
    RegistryEntry {
        primitive: Primitive::Heading,
        props: &[
            prop("text", PropertyKind::Str, Some(DefaultValue::Str("Heading"))),
            // Valid range 1-6; out-of-range values are a render fault
            prop("level", PropertyKind::Num, Some(DefaultValue::Num(1.0))),
        ],
    },
    RegistryEntry {
        primitive: Primitive::Paragraph,
        props: &[prop(
            "text",
            PropertyKind::Str,
            Some(DefaultValue::Str("Paragraph")),
        )],
    },
    RegistryEntry {
        primitive: Primitive::Image,
        props: &[
            prop("src", PropertyKind::Str, Some(DefaultValue::Str(""))),
            prop("alt", PropertyKind::Str, Some(DefaultValue::Str("Image"))),
            prop("width", PropertyKind::Num, None),
            prop("height", PropertyKind::Num, None),
        ],
    },
    RegistryEntry {
        primitive: Primitive::Container,
        props: &[prop("className", PropertyKind::Str, Some(DefaultValue::Str("")))],
    },
    RegistryEntry {
        primitive: Primitive::Section,
        props: &[prop("className", PropertyKind::Str, Some(DefaultValue::Str("")))],
    },
    RegistryEntry {
        primitive: Primitive::Row,
        props: &[prop("className", PropertyKind::Str, Some(DefaultValue::Str("")))],
    },
    RegistryEntry {
        primitive: Primitive::Column,
        props: &[
            prop("className", PropertyKind::Str, Some(DefaultValue::Str(""))),
            prop("span", PropertyKind::Num, None),
        ],
    },
    RegistryEntry {
        primitive: Primitive::Divider,
        props: &[prop(
            "orientation",
            PropertyKind::Str,
            Some(DefaultValue::Str("horizontal")),
        )],
    },
    RegistryEntry {
        primitive: Primitive::Spacer,
        props: &[
            prop("height", PropertyKind::Num, Some(DefaultValue::Num(20.0))),
            prop("width", PropertyKind::Num, Some(DefaultValue::Num(0.0))),
        ],
    },
];

/// Look up a registry entry by type name.
///
/// Pure, total, side-effect free. `None` is the ordinary NotFound value
/// — callers must treat it as a recoverable per-node condition, never a
/// fatal one.
pub fn lookup(type_name: &str) -> Option<&'static RegistryEntry> {
    let primitive = Primitive::parse(type_name)?;
    ENTRIES.iter().find(|entry| entry.primitive == primitive)
}
