//! Route filtering: drops custom routes handled by the generic dynamic
//! entity controller from the documentation context. The nested entity
//! schema already documents those endpoints; leaving the generic route
//! entries in place would document them twice.

use std::any::TypeId;
use std::collections::HashMap;

/// Marker type for the generic dynamic entity controller. Routes register
/// their handler by `TypeId`, so matching is by controller identity, never
/// by path string; a host controller that merely shares a name is never
/// filtered.
pub struct DynamicEntityController;

#[derive(Clone, Debug, Default)]
pub struct RouteDefaults {
    pub controller: Option<TypeId>,
    pub parameters: HashMap<String, String>,
}

impl RouteDefaults {
    pub fn for_controller<C: 'static>() -> Self {
        Self {
            controller: Some(TypeId::of::<C>()),
            parameters: HashMap::new(),
        }
    }
}

/// One custom route definition contributed by the host application.
#[derive(Clone, Debug)]
pub struct CustomRoute {
    pub path: String,
    pub defaults: RouteDefaults,
}

impl CustomRoute {
    pub fn new(path: impl Into<String>, defaults: RouteDefaults) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }
}

/// Remove every route whose controller is the dynamic entity controller,
/// preserving the relative order of the rest. Routes without a controller
/// entry are always kept. Idempotent.
pub fn filter_custom_routes(routes: Vec<CustomRoute>) -> Vec<CustomRoute> {
    let dynamic_entity_controller = TypeId::of::<DynamicEntityController>();
    routes
        .into_iter()
        .filter(|route| {
            let keep = route.defaults.controller != Some(dynamic_entity_controller);
            if !keep {
                tracing::debug!(path = %route.path, "removing dynamic entity route from documentation context");
            }
            keep
        })
        .collect()
}
