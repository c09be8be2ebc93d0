use std::{
    any::{Any, TypeId},
    fmt,
};

/// Values are produced on one thread and handed to a handler which may run on another,
/// so anything injectable needs to be Send + 'static
pub trait Injectable: Send + 'static {}
impl<T: Send + 'static> Injectable for T {}

/// A freshly produced value of a known type
pub struct Produced {
    pub info: TypeInfo,
    pub value: Box<dyn Any + Send + 'static>,
}

impl Produced {
    pub(crate) fn new<T: Injectable>(value: T) -> Self {
        Produced {
            info: TypeInfo::of::<T>(),
            value: Box::new(value),
        }
    }

    /// Takes the value out as `T`
    ///
    /// On mismatch returns the name of the type which was actually produced
    pub fn downcast<T: Injectable>(self) -> Result<T, &'static str> {
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(self.info.type_name),
        }
    }
}
impl fmt::Debug for Produced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Produced").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
///
/// Equality and hashing only look at the [TypeId], the name is for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}
impl Eq for TypeInfo {}
impl std::hash::Hash for TypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produced_downcasts_to_its_own_type() {
        let produced = Produced::new(42_u32);
        assert_eq!(produced.info, TypeInfo::of::<u32>());
        assert_eq!(produced.downcast::<u32>(), Ok(42));
    }

    #[test]
    fn produced_reports_actual_type_on_mismatch() {
        let produced = Produced::new(String::from("token"));
        assert_eq!(
            produced.downcast::<u32>(),
            Err(std::any::type_name::<String>())
        );
    }
}
