//! Ordered customizers over a shared mutable model.
//!
//! A [`Customizer`] mutates a value of type `T`. Customizers are registered
//! into a [`Customizers`] list and applied in ascending [`Customizer::order`];
//! customizers with equal order keys run in registration order.

use eyre::{Result, WrapErr};

/// Order key of customizers that do not override [`Customizer::order`].
pub const DEFAULT_ORDER: i32 = 0;

/// Order key that runs before every other customizer.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// Order key that runs after every other customizer.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/// A unit of behavior that mutates a `T`.
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use sprout_codegen::customize::{Customizer, Customizers};
///
/// struct Greeting;
///
/// impl Customizer<Vec<String>> for Greeting {
///     fn customize(&self, lines: &mut Vec<String>) -> Result<()> {
///         lines.push("hello".to_string());
///         Ok(())
///     }
/// }
///
/// let mut customizers = Customizers::new();
/// customizers.register(Greeting);
///
/// let mut lines = Vec::new();
/// customizers.customize(&mut lines).unwrap();
/// assert_eq!(lines, ["hello"]);
/// ```
pub trait Customizer<T: ?Sized> {
    /// Apply this customizer to `target`.
    ///
    /// # Errors
    ///
    /// Return an error to abort the generation.
    fn customize(&self, target: &mut T) -> Result<()>;

    /// Position of this customizer; lower values run first.
    fn order(&self) -> i32 {
        DEFAULT_ORDER
    }

    /// The name used in logs and error messages.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// A customizer backed by a closure.
///
/// ```
/// use sprout_codegen::customize::{Customizers, FnCustomizer, HIGHEST_PRECEDENCE};
///
/// let mut customizers = Customizers::new();
/// customizers.register(FnCustomizer::new("second", |v: &mut Vec<u8>| {
///     v.push(2);
///     Ok(())
/// }));
/// customizers.register(
///     FnCustomizer::new("first", |v: &mut Vec<u8>| {
///         v.push(1);
///         Ok(())
///     })
///     .with_order(HIGHEST_PRECEDENCE),
/// );
///
/// let mut values = Vec::new();
/// customizers.customize(&mut values).unwrap();
/// assert_eq!(values, [1, 2]);
/// ```
pub struct FnCustomizer<F> {
    name: &'static str,
    order: i32,
    f: F,
}

impl<F> FnCustomizer<F> {
    pub fn new<T: ?Sized>(name: &'static str, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<()>,
    {
        Self {
            name,
            order: DEFAULT_ORDER,
            f,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl<T: ?Sized, F> Customizer<T> for FnCustomizer<F>
where
    F: Fn(&mut T) -> Result<()>,
{
    fn customize(&self, target: &mut T) -> Result<()> {
        (self.f)(target)
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// An ordered registry of customizers for `T`.
pub struct Customizers<T: ?Sized> {
    entries: Vec<Box<dyn Customizer<T>>>,
}

impl<T: ?Sized> Customizers<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a customizer. Registration order breaks ties between equal order keys.
    pub fn register(&mut self, customizer: impl Customizer<T> + 'static) -> &mut Self {
        self.entries.push(Box::new(customizer));
        self
    }

    /// Register a closure under `name` with the default order.
    pub fn register_fn<F>(&mut self, name: &'static str, f: F) -> &mut Self
    where
        F: Fn(&mut T) -> Result<()> + 'static,
        T: 'static,
    {
        self.register(FnCustomizer::new(name, f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Customizers in application order.
    pub fn ordered(&self) -> Vec<&dyn Customizer<T>> {
        let mut ordered: Vec<&dyn Customizer<T>> =
            self.entries.iter().map(|c| c.as_ref()).collect();
        // `sort_by_key` is stable, so registration order survives among equal keys.
        ordered.sort_by_key(|c| c.order());
        ordered
    }

    /// Apply every customizer once, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing customizer and returns its error, wrapped
    /// with the customizer's name.
    pub fn customize(&self, target: &mut T) -> Result<()> {
        for customizer in self.ordered() {
            apply(customizer, target)?;
        }
        Ok(())
    }
}

impl<T: ?Sized> Default for Customizers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Customizers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|c| (c.name(), c.order())))
            .finish()
    }
}

/// Apply a single customizer with logging and error context.
pub(crate) fn apply<T: ?Sized>(customizer: &dyn Customizer<T>, target: &mut T) -> Result<()> {
    let name = customizer.name();
    tracing::debug!(customizer = name, order = customizer.order(), "applying customizer");
    customizer
        .customize(target)
        .wrap_err_with(|| format!("customizer '{}' failed", name))
}

// `sprout_project::customizers::KotlinMavenBuildCustomizer` -> `KotlinMavenBuildCustomizer`
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
