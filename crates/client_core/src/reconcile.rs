//! Snapshot -> proxy reconciliation.
//!
//! Responsibilities
//! - Diff the previous frame's keyed proxy set against the latest
//!   snapshot's keyed entity set
//! - Create, update, and remove proxies so the key sets match exactly
//! - Stay generic over entity kind and renderer; callers provide the
//!   create/update/remove capabilities
//!
//! Invariant: after `reconcile` returns, `proxies.keys() == latest.keys()`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Capabilities a proxy collection needs from its owner. `create` may do
/// one-time placement side effects (e.g. layering a new visual behind
/// another); the reconciler prescribes nothing beyond calling it.
pub trait ProxyOps<E> {
    type Proxy;

    fn create(&mut self, entity: &E) -> Self::Proxy;
    fn update(&mut self, proxy: &mut Self::Proxy, entity: &E);
    fn remove(&mut self, proxy: Self::Proxy);
}

/// Closure adapter for `ProxyOps`, handy for tests and one-off call sites.
pub struct Hooks<C, U, R> {
    pub create: C,
    pub update: U,
    pub remove: R,
}

impl<E, P, C, U, R> ProxyOps<E> for Hooks<C, U, R>
where
    C: FnMut(&E) -> P,
    U: FnMut(&mut P, &E),
    R: FnMut(P),
{
    type Proxy = P;

    fn create(&mut self, entity: &E) -> P {
        (self.create)(entity)
    }
    fn update(&mut self, proxy: &mut P, entity: &E) {
        (self.update)(proxy, entity)
    }
    fn remove(&mut self, proxy: P) {
        (self.remove)(proxy)
    }
}

/// Bring `proxies` in sync with `latest`:
/// - identities only in `latest` are created and inserted
/// - identities only in `proxies` are removed and handed to `ops.remove`
/// - identities in both are updated in place
///
/// The create/remove sets are disjoint by construction, so their relative
/// order does not matter; update order is unspecified.
pub fn reconcile<K, E, H>(
    proxies: &mut HashMap<K, H::Proxy>,
    latest: &HashMap<K, E>,
    ops: &mut H,
) where
    K: Eq + Hash + Copy,
    H: ProxyOps<E>,
{
    let stale: Vec<K> = proxies
        .keys()
        .filter(|k| !latest.contains_key(k))
        .copied()
        .collect();
    for k in stale {
        if let Some(proxy) = proxies.remove(&k) {
            ops.remove(proxy);
        }
    }
    for (k, entity) in latest {
        match proxies.entry(*k) {
            Entry::Occupied(mut slot) => ops.update(slot.get_mut(), entity),
            Entry::Vacant(slot) => {
                slot.insert(ops.create(entity));
            }
        }
    }
}

/// One-shot path for singleton entities (ship, turret): create the proxy
/// lazily on first observation, then update it every tick, creation tick
/// included. The proxy is never recreated while the slot stays populated.
pub fn sync_singleton<E, H>(slot: &mut Option<H::Proxy>, entity: &E, ops: &mut H)
where
    H: ProxyOps<E>,
{
    if slot.is_none() {
        *slot = Some(ops.create(entity));
    }
    if let Some(proxy) = slot.as_mut() {
        ops.update(proxy, entity);
    }
}
