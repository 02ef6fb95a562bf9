use decoy_dns_application::services::ProviderChain;
use decoy_dns_application::use_cases::HandleAnswerUseCase;
use decoy_dns_domain::Config;
use decoy_dns_infrastructure::answers::{ExactAnswerContainer, PatternContainer, SafeBoxProvider};
use std::sync::Arc;
use tracing::info;

pub struct AnswerServices {
    pub exact: Arc<ExactAnswerContainer>,
    pub patterns: Arc<PatternContainer>,
    pub safe_box: Arc<SafeBoxProvider>,
    pub use_case: Arc<HandleAnswerUseCase>,
}

impl AnswerServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let exact = Arc::new(ExactAnswerContainer::new(
            &config.answers.exact,
            config.answers.reverse_ptr,
        )?);
        let patterns = Arc::new(PatternContainer::new(&config.answers.patterns)?);
        let safe_box = Arc::new(SafeBoxProvider::new(&config.safe_box)?);

        let chain = Arc::new(ProviderChain::new(
            exact.clone(),
            patterns.clone(),
            safe_box.clone(),
        ));
        info!(providers = ?chain.provider_names(), "Answer providers ready");

        let use_case =
            Arc::new(HandleAnswerUseCase::new(chain).with_ttl(config.answers.ttl));

        Ok(Self {
            exact,
            patterns,
            safe_box,
            use_case,
        })
    }
}
