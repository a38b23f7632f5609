use crate::config::PaginationConfig;
use crate::data::PaginationData;
use crate::error::Result;
use crate::request::PaginationRequest;

/// Strategy deciding which pages of a request stay visible.
pub trait PaginationBehaviour {
    fn compute(
        &self,
        request: &PaginationRequest,
        config: &PaginationConfig,
    ) -> Result<PaginationData>;
}

impl<B: PaginationBehaviour + ?Sized> PaginationBehaviour for &B {
    fn compute(
        &self,
        request: &PaginationRequest,
        config: &PaginationConfig,
    ) -> Result<PaginationData> {
        (**self).compute(request, config)
    }
}

impl<B: PaginationBehaviour + ?Sized> PaginationBehaviour for Box<B> {
    fn compute(
        &self,
        request: &PaginationRequest,
        config: &PaginationConfig,
    ) -> Result<PaginationData> {
        (**self).compute(request, config)
    }
}
