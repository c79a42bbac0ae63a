use crate::error::{Result, SdoError};
use crate::io::sdo::common::ElementType;

/// Read access to SDO_ELEM_INFO by triplet index.
///
/// Every accessor returns `-1` for a triplet past the end.
#[derive(Debug, Clone, Copy)]
pub struct ElemInfoCursor<'a> {
    elem_info: &'a [i32],
}

impl<'a> ElemInfoCursor<'a> {
    pub fn try_new(elem_info: &'a [i32]) -> Result<Self> {
        if elem_info.len() % 3 != 0 {
            return Err(SdoError::MalformedEncoding(format!(
                "ELEM_INFO length {} is not a multiple of 3",
                elem_info.len()
            )));
        }
        Ok(Self { elem_info })
    }

    /// Number of triplets.
    pub fn len(&self) -> usize {
        self.elem_info.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.elem_info.is_empty()
    }

    fn field(&self, triplet: usize, field: usize) -> i32 {
        self.elem_info
            .get(triplet * 3 + field)
            .copied()
            .unwrap_or(-1)
    }

    pub fn starting_offset(&self, triplet: usize) -> i32 {
        self.field(triplet, 0)
    }

    pub fn etype(&self, triplet: usize) -> i32 {
        self.field(triplet, 1)
    }

    pub fn interpretation(&self, triplet: usize) -> i32 {
        self.field(triplet, 2)
    }

    /// The element type of a triplet, or `None` past the end or for an unknown etype code.
    pub fn element_type(&self, triplet: usize) -> Option<ElementType> {
        ElementType::try_from(self.etype(triplet)).ok()
    }

    /// The interpretation of a compound or shell header, as a sub-triplet count.
    pub fn sub_elements(&self, triplet: usize) -> Result<usize> {
        let count = self.interpretation(triplet);
        let count = usize::try_from(count).map_err(|_| {
            SdoError::MalformedEncoding(format!(
                "Triplet {triplet} declares {count} sub-elements"
            ))
        })?;
        if triplet + count >= self.len() {
            return Err(SdoError::MalformedEncoding(format!(
                "Triplet {triplet} declares {count} sub-elements but only {} triplets follow",
                self.len().saturating_sub(triplet + 1)
            )));
        }
        Ok(count)
    }
}
