use crate::Canvas;
use easel_core::Result;
use shapes::{Drawable, ShapeId};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Something a shape can be attached to.
///
/// A [`Canvas`] is its own target; a [`crate::Window`] resolves to its
/// initial canvas.
pub trait DrawTarget {
    fn target_canvas(&mut self) -> Result<&mut Canvas>;
}

/// A shared, mutable reference to one shape.
///
/// Every clone of a handle is the same shape: changes made through one are
/// seen by the canvases it is attached to on their next render. Use
/// [`Handle::duplicate`] for an independent shape with equal attributes.
///
/// ```
/// use canvas::Handle;
/// use shapes::prelude::*;
///
/// let circle = Handle::new(Circle::new(Point::new(100.0, 75.0), 30.0));
/// let same = circle.clone();
/// same.borrow_mut().move_by(10.0, 0.0);
/// assert_eq!(circle.borrow().center, Point::new(110.0, 75.0));
///
/// let other = circle.duplicate();
/// assert_ne!(other.id(), circle.id());
/// assert_eq!(*other.borrow(), *circle.borrow());
/// ```
pub struct Handle<T> {
    id: ShapeId,
    shape: Rc<RefCell<T>>,
}

impl<T: Drawable + 'static> Handle<T> {
    pub fn new(shape: T) -> Self {
        Self {
            id: ShapeId::new(),
            shape: Rc::new(RefCell::new(shape)),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.shape.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.shape.borrow_mut()
    }

    /// Mutate the shape in place and return whatever `f` returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.shape.borrow_mut())
    }

    /// A new shape, not attached anywhere, with the same attributes.
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        Self::new(self.shape.borrow().clone())
    }

    pub fn attach_to(&self, target: &mut impl DrawTarget) -> Result<()> {
        target.target_canvas()?.draw(self);
        Ok(())
    }

    pub fn detach_from(&self, target: &mut impl DrawTarget) -> Result<()> {
        target.target_canvas()?.undraw(self)
    }

    pub(crate) fn erased(&self) -> Rc<RefCell<dyn Drawable>> {
        self.shape.clone()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            shape: self.shape.clone(),
        }
    }
}

impl<T: Drawable + 'static> From<T> for Handle<T> {
    fn from(shape: T) -> Self {
        Self::new(shape)
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("shape", &self.shape.borrow())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shape.borrow().fmt(f)
    }
}
