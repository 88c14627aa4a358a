use crate::foundation::error::{SceneError, SceneResult};
use crate::object::graphics_object::GraphicsObject;
use crate::object::handle::{LayerKind, ObjectHandle};

/// Fixed-size table of object slots.
///
/// Every object stored here carries the handle of its slot, and so does its payload.
#[derive(Debug)]
pub struct ObjectLayer {
    kind: LayerKind,
    objects: Vec<GraphicsObject>,
}

impl ObjectLayer {
    /// Layer of `slots` default objects, each attached to its slot.
    pub fn new(kind: LayerKind, slots: u32) -> Self {
        let objects = (0..slots)
            .map(|i| {
                let mut obj = GraphicsObject::new();
                obj.attach(ObjectHandle::slot(kind, i));
                obj
            })
            .collect();
        Self { kind, objects }
    }

    /// Which layer this is.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the layer has no slots.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object in slot `index`.
    pub fn get(&self, index: usize) -> SceneResult<&GraphicsObject> {
        let len = self.objects.len();
        self.objects
            .get(index)
            .ok_or_else(|| out_of_range(self.kind, index, len))
    }

    /// Mutable object in slot `index`.
    pub fn get_mut(&mut self, index: usize) -> SceneResult<&mut GraphicsObject> {
        let len = self.objects.len();
        self.objects
            .get_mut(index)
            .ok_or_else(|| out_of_range(self.kind, index, len))
    }

    /// Store `obj` in slot `index`, re-pointing it (and its payload) at the slot.
    pub fn set(&mut self, index: usize, mut obj: GraphicsObject) -> SceneResult<()> {
        let slot = self.get_mut(index)?;
        obj.attach(slot.handle());
        *slot = obj;
        Ok(())
    }

    /// Deep-copy slot `from` over slot `to`.
    pub fn copy_object(&mut self, from: usize, to: usize) -> SceneResult<()> {
        self.get(from)?;
        self.get(to)?;
        if from == to {
            return Ok(());
        }
        let (src, dst) = if from < to {
            let (head, tail) = self.objects.split_at_mut(to);
            (&head[from], &mut tail[0])
        } else {
            let (head, tail) = self.objects.split_at_mut(from);
            (&tail[0], &mut head[to])
        };
        dst.clone_from(src);
        Ok(())
    }

    /// Reset slot `index` to a default object.
    pub fn clear(&mut self, index: usize) -> SceneResult<()> {
        self.get_mut(index)?.clear_object();
        Ok(())
    }

    /// Slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GraphicsObject)> {
        self.objects.iter().enumerate()
    }

    /// Mutable slots in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut GraphicsObject)> {
        self.objects.iter_mut().enumerate()
    }
}

fn out_of_range(kind: LayerKind, index: usize, len: usize) -> SceneError {
    SceneError::validation(format!(
        "{kind:?} object index {index} out of range (layer has {len} slots)"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
