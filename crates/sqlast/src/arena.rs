//! Arena allocator for SQL AST nodes.
//!
//! The parser allocates every node of one statement batch in a single
//! [`AstArena`]. Nodes borrow from the arena with lifetime `'a` and are freed
//! together when the arena is dropped, so the traversal engine and visitors
//! only ever hold shared references into it.

use bumpalo::Bump;

/// Arena allocator backing a SQL AST.
///
/// All node types are `Copy`, so whole lists of children can be moved into
/// the arena with [`AstArena::alloc_slice_copy`].
///
/// # Example
///
/// ```rust
/// use sqlast::{AstArena, Ident, Span};
///
/// let arena = AstArena::new();
///
/// let name = arena.alloc_str("users");
/// let ident = arena.alloc(Ident::new(name, Span::new(14, 19)));
/// assert_eq!(ident.value, "users");
///
/// let columns = arena.alloc_slice_copy(&[
///     Ident::new("id", Span::new(7, 9)),
///     Ident::new("name", Span::new(11, 15)),
/// ]);
/// assert_eq!(columns.len(), 2);
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new, empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a node in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, invalidating every node allocated from it.
    ///
    /// Note: This does NOT call `Drop` for allocated objects.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AstArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstArena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
