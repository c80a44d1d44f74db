//! Verb and noun selection for generated function names.
//!
//! Method prefixes map onto approved PowerShell verbs; the noun is derived
//! from the payload type the endpoint returns.

use sdkwrap_core::{EndpointDescriptor, Error, Result, TypeRef};
use serde::Serialize;
use std::fmt;

const TASKS_NAMESPACE: &str = "System.Threading.Tasks";

/// Verb of a generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verb {
    /// From a `Get` method
    Read,
    /// From a `Create` method
    New,
    /// From a `Delete` method
    Remove,
    /// From an `Update` method
    Modify,
}

impl Verb {
    /// Every verb, in prefix-matching order.
    pub const ALL: [Self; 4] = [Self::Read, Self::New, Self::Remove, Self::Modify];

    /// Returns the verb as used in function names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::New => "New",
            Self::Remove => "Remove",
            Self::Modify => "Modify",
        }
    }

    /// Returns the method-name prefix that selects this verb.
    #[must_use]
    pub const fn method_prefix(self) -> &'static str {
        match self {
            Self::Read => "Get",
            Self::New => "Create",
            Self::Remove => "Delete",
            Self::Modify => "Update",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the verb from a method name's prefix (case-insensitive).
///
/// # Errors
///
/// Returns `Error::UnrecognizedVerb` if no prefix matches.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::{Verb, select_verb};
///
/// assert_eq!(select_verb("GetDevices").unwrap(), Verb::Read);
/// assert_eq!(select_verb("createSite").unwrap(), Verb::New);
/// assert!(select_verb("PatchDevice").is_err());
/// ```
pub fn select_verb(method_name: &str) -> Result<Verb> {
    Verb::ALL
        .into_iter()
        .find(|verb| strip_prefix_ignore_case(method_name, verb.method_prefix()).is_some())
        .ok_or_else(|| Error::UnrecognizedVerb {
            method: method_name.to_string(),
        })
}

/// Returns the type carrying the payload of `ty`.
///
/// Single-argument generics (`Task<T>`, `List<T>`, `Nullable<T>`) and arrays
/// are unwrapped recursively.
#[must_use]
pub fn payload_type(ty: &TypeRef) -> &TypeRef {
    let mut current = ty;
    while let [inner] = current.generic_arguments.as_slice() {
        current = inner;
    }
    current
}

/// Returns `true` for `void` and non-generic `Task`/`ValueTask` returns.
#[must_use]
pub fn is_void_like(ty: &TypeRef) -> bool {
    ty.is_void()
        || (ty.namespace.as_deref() == Some(TASKS_NAMESPACE)
            && ty.generic_arguments.is_empty()
            && matches!(ty.name.as_str(), "Task" | "ValueTask"))
}

/// Selects the noun from a type.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::select_noun;
/// use sdkwrap_core::TypeRef;
///
/// assert_eq!(select_noun(&TypeRef::class("NetBox.Model", "DeviceListResponse")), "Device");
/// assert_eq!(select_noun(&TypeRef::class("NetBox.Model", "SiteResult")), "Site");
/// assert_eq!(select_noun(&TypeRef::class("NetBox.Model", "Categories")), "Category");
/// assert_eq!(select_noun(&TypeRef::class("NetBox.Model", "Statuses")), "Statuse");
/// ```
#[must_use]
pub fn select_noun(ty: &TypeRef) -> String {
    noun_from_name(payload_type(ty).simple_name())
}

/// Selects the noun for an endpoint.
///
/// Endpoints returning nothing informative take their noun from the method
/// name after the verb prefix, so `DeleteVlan` yields `Vlan` rather than
/// `Void`. Everything else uses [`select_noun`] on the return type.
///
/// # Errors
///
/// Returns `Error::UnrecognizedVerb` if the method has no verb prefix.
///
/// # Examples
///
/// ```
/// use sdkwrap_codegen::select_endpoint_noun;
/// use sdkwrap_core::{EndpointDescriptor, TypeRef};
///
/// let delete = EndpointDescriptor::new(
///     "IpamApi",
///     "DeleteVlan",
///     TypeRef::void(),
///     [("id", TypeRef::value("System", "Int32"))],
/// );
/// assert_eq!(select_endpoint_noun(&delete).unwrap(), "Vlan");
/// ```
pub fn select_endpoint_noun(endpoint: &EndpointDescriptor) -> Result<String> {
    let verb = select_verb(&endpoint.method_name)?;

    if is_void_like(&endpoint.return_type) {
        let remainder = strip_prefix_ignore_case(&endpoint.method_name, verb.method_prefix())
            .unwrap_or_default();
        if !remainder.is_empty() {
            return Ok(noun_from_name(remainder));
        }
    }

    Ok(select_noun(&endpoint.return_type))
}

/// Turns a bare type or method-remainder name into a singular PascalCase noun.
///
/// Strips a trailing `Response`, then `Result` (both case-insensitive), then
/// a trailing `List` (case-sensitive) when something remains. The result is
/// singularized and its first character uppercased.
#[must_use]
pub fn noun_from_name(name: &str) -> String {
    let mut noun = name.split_once('`').map_or(name, |(base, _)| base);

    if let Some(stripped) = strip_suffix_ignore_case(noun, "Response") {
        noun = stripped;
    }
    if let Some(stripped) = strip_suffix_ignore_case(noun, "Result") {
        noun = stripped;
    }
    if let Some(stripped) = noun.strip_suffix("List")
        && !stripped.is_empty()
    {
        noun = stripped;
    }

    upper_first(&singularize(noun))
}

/// Applies the first matching English plural rule.
///
/// `-ies` becomes `-y`; `-sses`, `-shes`, `-ches`, and `-xes` lose their
/// last two characters; a trailing `s` is dropped from words longer than one
/// character. Anything else is returned unchanged.
#[must_use]
pub fn singularize(word: &str) -> String {
    if let Some(stem) = strip_suffix_ignore_case(word, "ies") {
        return format!("{stem}y");
    }

    for suffix in ["sses", "shes", "ches", "xes"] {
        if strip_suffix_ignore_case(word, suffix).is_some() {
            return word[..word.len() - 2].to_string();
        }
    }

    if word.len() > 1
        && let Some(stem) = strip_suffix_ignore_case(word, "s")
    {
        return stem.to_string();
    }

    word.to_string()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let tail = text.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..split])
}
