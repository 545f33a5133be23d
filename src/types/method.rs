/// Where the value of a method parameter comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSource {
    /// Must be provided by the caller.
    Required,
    /// May be omitted, the contract applies its default.
    Optional,
    /// Defaults to the account bound to the proxy.
    Account,
}

/// Kind of the remote method.
///
/// * [`MethodKind::Readonly`] is executed with `icx_call` and returns a value.
/// * [`MethodKind::External`] changes state and is submitted as a signed transaction.
/// * [`MethodKind::Payable`] is [`MethodKind::External`] that also accepts ICX value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodKind {
    Readonly,
    External,
    Payable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub source: ParamSource,
}

impl ParamSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            source: ParamSource::Required,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            source: ParamSource::Optional,
        }
    }

    pub const fn account(name: &'static str) -> Self {
        Self {
            name,
            source: ParamSource::Account,
        }
    }
}

/// Declarative description of a remote contract method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub kind: MethodKind,
}

impl MethodSpec {
    pub const fn readonly(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            params,
            kind: MethodKind::Readonly,
        }
    }

    pub const fn external(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            params,
            kind: MethodKind::External,
        }
    }

    pub const fn payable(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            params,
            kind: MethodKind::Payable,
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn is_readonly(&self) -> bool {
        self.kind == MethodKind::Readonly
    }
}
