use tracing::warn;

use crate::error::{Result, SdoError};
use crate::geometry::GeometryFactory;
use crate::io::sdo::common::ElementType;
use crate::io::sdo::reader::Decoder;

impl<F: GeometryFactory> Decoder<'_, F> {
    /// Decode a `(offset, 1007, 1)` solid header and its exterior shell.
    pub(crate) fn solid(&self, triplet: usize) -> Result<Option<F::Geometry>> {
        self.start_index(triplet)?;
        if self.elem_info.element_type(triplet) != Some(ElementType::Solid) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not a solid",
                self.elem_info.etype(triplet)
            )));
        }
        let interpretation = self.elem_info.interpretation(triplet);
        if interpretation != 1 {
            warn!("Cannot decode a solid with interpretation {interpretation}, expected 1");
            return Ok(None);
        }

        let Some((shell, next)) = self.shell(triplet + 1)? else {
            return Ok(None);
        };
        if self.elem_info.element_type(next) == Some(ElementType::CompositeSurfaceInterior) {
            warn!("Cannot decode a solid with interior shells");
            return Ok(None);
        }
        Ok(Some(self.factory.create_solid(shell, vec![])))
    }

    /// Decode a `(offset, 1006, N)` shell header and its `N` faces.
    ///
    /// Returns the shell and the index of the first triplet after it.
    fn shell(&self, triplet: usize) -> Result<Option<(F::Shell, usize)>> {
        self.start_index(triplet)?;
        if self.elem_info.element_type(triplet) != Some(ElementType::CompositeSurfaceExterior) {
            return Err(SdoError::MalformedEncoding(format!(
                "ETYPE {} is not an exterior shell",
                self.elem_info.etype(triplet)
            )));
        }
        let count = self.elem_info.sub_elements(triplet)?;

        let mut faces = Vec::with_capacity(count);
        let mut i = triplet + 1;
        for _ in 0..count {
            let Some((face, next)) = self.surface(i)? else {
                return Ok(None);
            };
            faces.push(face);
            i = next;
        }
        Ok(Some((self.factory.create_shell(faces), i)))
    }
}
