use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback invoked with the signed-in user id, or `None` after sign-out.
pub type Listener = Arc<dyn Fn(Option<&str>) + Send + Sync>;

/// Boundary to the identity provider.
///
/// The user id only decides which edit and delete operations are offered; it
/// is an opaque string.
pub trait IdentityProvider {
    fn current_user_id(&self) -> Option<String>;

    /// Registers `listener` for identity changes.
    ///
    /// The listener is called once straight away with the current user, then
    /// on every change until the returned [`Subscription`] is cancelled or
    /// dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<u64, Listener>,
}

type Registry = Arc<Mutex<Listeners>>;

fn lock(registry: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle for a registered identity listener.
///
/// Dropping the handle unsubscribes, so keep it alive for as long as the
/// listener should fire.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Stops further notifications.
    pub fn unsubscribe(self) {}

    /// True while the listener is still registered with a live provider.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| lock(&registry).entries.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).entries.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Identity provider held in process, driven by explicit sign-in and sign-out.
///
/// Clones share the same user and listeners.
#[derive(Clone, Default)]
pub struct LocalIdentity {
    user: Arc<Mutex<Option<String>>>,
    listeners: Registry,
}

impl LocalIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that starts signed in as `user_id`.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let identity = Self::new();
        identity.set_user(Some(user_id.into()));
        identity
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        log::info!("Signed in as {user_id}");
        self.set_user(Some(user_id));
    }

    pub fn sign_out(&self) {
        log::info!("Signed out");
        self.set_user(None);
    }

    fn set_user(&self, user: Option<String>) {
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = user.clone();
        self.notify(user.as_deref());
    }

    fn notify(&self, user: Option<&str>) {
        // Listeners run without the lock held so they may unsubscribe themselves.
        let listeners: Vec<Listener> = lock(&self.listeners).entries.values().cloned().collect();
        for listener in listeners {
            listener(user);
        }
    }
}

impl IdentityProvider for LocalIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut registry = lock(&self.listeners);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.insert(id, Arc::clone(&listener));
            id
        };

        listener(self.current_user_id().as_deref());

        Subscription {
            id,
            registry: Arc::downgrade(&self.listeners),
        }
    }
}
