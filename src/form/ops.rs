//! Persistence operations injected into the form by its owner, and the
//! drivers that run them against a [`FoodForm`].

use std::future::Future;
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture};

use super::{FoodForm, FormCommand};
use crate::types::Food;

pub type SaveFn = Arc<dyn Fn(Food) -> LocalBoxFuture<'static, Result<(), String>> + Send + Sync>;
pub type DeleteFn = Arc<dyn Fn() -> LocalBoxFuture<'static, Result<(), String>> + Send + Sync>;

pub fn save_fn<F, Fut>(f: F) -> SaveFn
where
    F: Fn(Food) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Arc::new(move |food| f(food).boxed_local())
}

pub fn delete_fn<F, Fut>(f: F) -> DeleteFn
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Arc::new(move || f().boxed_local())
}

/// Submit `form` through `save`.
///
/// The locked snapshot is published before this returns, so controls are
/// disabled before the save is even polled. The returned future settles the
/// form and publishes the outcome. `None` means the form refused to submit
/// and nothing was published.
pub fn submit<P>(
    form: &FoodForm,
    save: &SaveFn,
    mut publish: P,
) -> Option<impl Future<Output = Option<FormCommand>>>
where
    P: FnMut(FoodForm),
{
    let (saving, food) = form.begin_submit()?;
    publish(saving.clone());
    let pending = save(food);

    Some(async move {
        let (settled, command) = saving.finish(pending.await);
        publish(settled);
        command
    })
}

/// Delete through `delete`, publishing snapshots the same way as [`submit`].
pub fn delete<P>(
    form: &FoodForm,
    delete: &DeleteFn,
    mut publish: P,
) -> Option<impl Future<Output = ()>>
where
    P: FnMut(FoodForm),
{
    let deleting = form.begin_delete()?;
    publish(deleting.clone());
    let pending = delete();

    Some(async move {
        let (settled, _) = deleting.finish(pending.await);
        publish(settled);
    })
}
