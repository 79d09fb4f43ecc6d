//! Macros to reduce boilerplate in layer implementations

/// Implements the property accessors of [`RenderableLayer`] by delegating
/// to a [`LayerProperties`] field.
///
/// The second argument names a `&mut self` method that is called after any
/// setter, so the layer can push the change to whatever it has rendered.
///
/// This generates implementations for:
/// - id(), name(), layer_type()
/// - z_index(), set_z_index()
/// - opacity(), set_opacity()
/// - is_visible(), set_visible()
///
/// [`RenderableLayer`]: crate::traits::RenderableLayer
/// [`LayerProperties`]: crate::layers::base::LayerProperties
#[macro_export]
macro_rules! impl_layer_properties {
    ($properties_field:ident, $on_change:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
            self.$on_change();
        }

        fn opacity(&self) -> f32 {
            self.$properties_field.opacity
        }

        fn set_opacity(&mut self, opacity: f32) {
            self.$properties_field.opacity = opacity.clamp(0.0, 1.0);
            self.$on_change();
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
            self.$on_change();
        }
    };
}
