use std::{borrow::Borrow, convert::Infallible, fmt::Display, str::FromStr};

/// The token naming the view that is currently active, e.g. `proyectos`.
///
/// Any string is a valid [`RouteId`]. Whether it names a real view is only decided when a
/// [`ViewRegistry`](crate::ViewRegistry) dispatches it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id is the empty token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `href` of an anchor pointing at this route: `#` followed by the id.
    ///
    /// ```rust
    /// # use kallari_router::RouteId;
    /// assert_eq!(RouteId::from("dona").href(), "#dona");
    /// assert_eq!(RouteId::default().href(), "#");
    /// ```
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

/// Turn a raw navigational fragment into the active [`RouteId`].
///
/// A single leading `#` is stripped. If nothing is left, the `home` id is returned, so the
/// result is always defined.
///
/// ```rust
/// # use kallari_router::{resolve, RouteId};
/// let home = RouteId::from("inicio");
/// assert_eq!(resolve("#proyectos", &home), "proyectos");
/// assert_eq!(resolve("proyectos", &home), "proyectos");
/// assert_eq!(resolve("#", &home), "inicio");
/// assert_eq!(resolve("", &home), "inicio");
/// ```
pub fn resolve(fragment: &str, home: &RouteId) -> RouteId {
    let token = fragment.strip_prefix('#').unwrap_or(fragment);
    match token.is_empty() {
        true => home.clone(),
        false => RouteId::from(token),
    }
}

impl Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RouteId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RouteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&RouteId> for RouteId {
    fn from(value: &RouteId) -> Self {
        value.clone()
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_hash() {
        let home = RouteId::from("inicio");
        assert_eq!(resolve("##dona", &home), "#dona");
    }

    #[test]
    fn keeps_unknown_tokens() {
        let home = RouteId::from("inicio");
        assert_eq!(resolve("#blog", &home), "blog");
        assert_eq!(resolve("#Sobre Nosotros", &home), "Sobre Nosotros");
    }

    #[test]
    fn parse_is_infallible() {
        let id: RouteId = "transparencia".parse().unwrap();
        assert_eq!(id.as_str(), "transparencia");
        assert_eq!(id.to_string(), "transparencia");
    }
}
