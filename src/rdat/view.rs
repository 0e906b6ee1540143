use ouroboros::self_referencing;

use crate::{
    rdat::{DxilRuntimeData, ValidationConfig},
    Result,
};

#[self_referencing]
/// An owned runtime data container.
///
/// `RuntimeDataView` keeps the container bytes and the [`DxilRuntimeData`] borrowing from them
/// together, so a parsed container can be stored and moved around without a lifetime
/// parameter. The table directory is read and validated once, when the view is created.
///
/// # Examples
///
/// ```rust
/// use rdatscope::rdat::RuntimeDataView;
///
/// #[rustfmt::skip]
/// let container = vec![
///     0x01, 0x00, 0x00, 0x00,
///     0x01, 0x00, 0x00, 0x00,
///     0x04, 0x00, 0x00, 0x00,
///     0x10, 0x00, 0x00, 0x00,
///     b'F', b'o', b'o', 0x00,
/// ];
///
/// let view = RuntimeDataView::from_mem(container)?;
/// assert_eq!(view.runtime_data().table_headers().len(), 1);
/// # Ok::<(), rdatscope::Error>(())
/// ```
pub struct RuntimeDataView {
    /// The container bytes
    data: Vec<u8>,

    #[borrows(data)]
    #[covariant]
    /// Table readers over `data`
    runtime_data: DxilRuntimeData<'this>,
}

impl RuntimeDataView {
    /// Take ownership of `data` and parse it with the default [`ValidationConfig`].
    ///
    /// # Errors
    /// Returns an error if the container is malformed, see [`DxilRuntimeData::with_config`].
    pub fn from_mem(data: Vec<u8>) -> Result<Self> {
        Self::from_mem_with_config(data, ValidationConfig::default())
    }

    /// Take ownership of `data` and parse it with `config`.
    ///
    /// # Errors
    /// Returns an error if the container is malformed, see [`DxilRuntimeData::with_config`].
    pub fn from_mem_with_config(data: Vec<u8>, config: ValidationConfig) -> Result<Self> {
        RuntimeDataView::try_new(data, |data| DxilRuntimeData::with_config(data, config))
    }

    /// The parsed container
    #[must_use]
    pub fn runtime_data(&self) -> &DxilRuntimeData<'_> {
        self.borrow_runtime_data()
    }

    /// The container bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.borrow_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rdat::RuntimeDataPartType, test::RdatBuilder, Error};

    #[test]
    fn owned() {
        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::String, b"main\0".to_vec())
            .build();
        let length = data.len();

        let view = RuntimeDataView::from_mem(data).unwrap();
        assert_eq!(view.data().len(), length);
        assert_eq!(view.runtime_data().string_table().len(), 5);

        let moved = Box::new(view);
        assert_eq!(moved.runtime_data().data().len(), length);
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            RuntimeDataView::from_mem(Vec::new()),
            Err(Error::Empty)
        ));

        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::Index, vec![0x00; 3])
            .build();
        assert!(RuntimeDataView::from_mem(data.clone()).is_err());
        assert!(RuntimeDataView::from_mem_with_config(data, ValidationConfig::disabled()).is_ok());
    }
}
