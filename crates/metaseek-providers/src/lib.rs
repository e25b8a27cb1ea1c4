//! Provider catalog and the concrete adapters behind it.
//!
//! Adding a provider means one new module and one new row in
//! [`catalog::adapter`]; nothing else branches on provider identity.

pub mod blocks;
pub mod bocha;
pub mod client;
pub mod normalize;
pub mod options;
pub mod raw;
pub mod request;
pub mod searxng;
pub mod zhipu;

pub mod catalog {
    use crate::{bocha::BochaAdapter, searxng::SearxngAdapter, zhipu::ZhipuAdapter};
    use metaseek_core::{ProviderAdapter, ProviderId, ProviderInfo, Result};

    static ZHIPU: ZhipuAdapter = ZhipuAdapter;
    static BOCHA: BochaAdapter = BochaAdapter;
    static SEARXNG: SearxngAdapter = SearxngAdapter;

    /// The adapter for a provider id. Total over the fixed set.
    pub fn adapter(id: ProviderId) -> &'static dyn ProviderAdapter {
        match id {
            ProviderId::SearchStd => &ZHIPU,
            ProviderId::BochaAi => &BOCHA,
            ProviderId::Searxng => &SEARXNG,
        }
    }

    /// Catalog entry for a wire tag; `UnknownProvider` outside the set.
    pub fn describe(tag: &str) -> Result<&'static ProviderInfo> {
        Ok(adapter(ProviderId::parse(tag)?).info())
    }

    /// All providers in catalog order.
    pub fn all() -> Vec<&'static ProviderInfo> {
        ProviderId::all().iter().map(|id| adapter(*id).info()).collect()
    }

    pub fn default_provider() -> ProviderId {
        ProviderId::SearchStd
    }
}
