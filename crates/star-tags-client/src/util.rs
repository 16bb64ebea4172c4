//! Collection helpers

/// Value-based removal for vectors
pub trait VecExt<T: PartialEq> {
    /// Remove the first element equal to `item`, if any
    fn remove_item(&mut self, item: &T) -> &mut Self;
}

impl<T: PartialEq> VecExt<T> for Vec<T> {
    fn remove_item(&mut self, item: &T) -> &mut Self {
        if let Some(index) = self.iter().position(|x| x == item) {
            self.remove(index);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut v = vec!["a", "b", "a"];
        v.remove_item(&"a");
        assert_eq!(v, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut v = vec![1, 2, 3];
        v.remove_item(&9);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_chains() {
        let mut v = vec![1, 2, 3];
        v.remove_item(&1).remove_item(&3);
        assert_eq!(v, vec![2]);
    }
}
