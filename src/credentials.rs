use crate::constants::TOKEN_STORAGE_KEYS;

/// Supplies the bearer token attached to outgoing requests, if any.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// No bearer token; requests rely on cookies alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        let token = self.0.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

impl<P: CredentialProvider> CredentialProvider for Option<P> {
    fn bearer_token(&self) -> Option<String> {
        self.as_ref().and_then(CredentialProvider::bearer_token)
    }
}

/// A key/value store that may hold a token, such as browser storage.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Looks the token up under each of the known key names across a list of
/// stores. The first non-empty hit wins; stores are searched in order.
pub struct StoredToken<S> {
    stores: Vec<S>,
}

impl<S: TokenStore> StoredToken<S> {
    pub fn new(stores: Vec<S>) -> Self {
        Self { stores }
    }
}

impl<S: TokenStore> CredentialProvider for StoredToken<S> {
    fn bearer_token(&self) -> Option<String> {
        self.stores.iter().find_map(|store| {
            TOKEN_STORAGE_KEYS
                .iter()
                .filter_map(|key| store.get(key))
                .map(|token| token.trim().to_string())
                .find(|token| !token.is_empty())
        })
    }
}
