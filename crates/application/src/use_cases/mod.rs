pub mod dns;
pub mod redirect;

pub use dns::{HandleCaptiveQueryUseCase, QueryAnswer};
pub use redirect::{RedirectSource, ResolveRedirectAddressUseCase, ResolvedRedirect};
