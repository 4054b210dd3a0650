mod resolve_redirect_address;

pub use resolve_redirect_address::{
    RedirectSource, ResolveRedirectAddressUseCase, ResolvedRedirect,
};
