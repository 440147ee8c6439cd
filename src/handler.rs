//! Terminal handler trait and type erasure.
//!
//! The router holds handlers of *different* concrete types in a single table,
//! so each one is hidden behind a trait object (`dyn ErasedHandler`). The
//! chain from user code to vtable call:
//!
//! ```text
//! async fn list_users(ctx: Context) -> Response { … }   ← user writes this
//!        ↓ router.on(…, list_users)
//! list_users.into_boxed_handler()                       ← Handler blanket impl
//!        ↓ Arc::new(FnHandler(list_users))              ← type-erased wrapper
//! handler.call(ctx) at request time                     ← one vtable dispatch
//! ```
//!
//! Per request that costs one `Arc` clone and one virtual call — noise next
//! to network I/O.
//!
//! A handler only ever runs after every stage in its route's chain has
//! passed; it receives the context by value and cannot be re-entered for the
//! same request.

use std::future::Future;
use std::sync::Arc;

use crate::context::Context;
use crate::pipeline::BoxFuture;
use crate::response::{IntoResponse, Response};

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, ctx: Context) -> BoxFuture<'static, Response>;
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid terminal handler.
///
/// You never implement this yourself. It is automatically satisfied for any
/// `async fn name(ctx: Context) -> impl IntoResponse`. The trait is sealed:
/// only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Newtype bridging a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Context) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, ctx: Context) -> BoxFuture<'static, Response> {
        let fut = (self.0)(ctx);
        Box::pin(async move { fut.await.into_response() })
    }
}
