/// A vertex only carries its display name. Identity is the vertex index in
/// the owning `Graph`, so two cities with the same name are still distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub name: String,
}

impl Vertex {
    pub fn new<S: Into<String>>(name: S) -> Vertex {
        Vertex { name: name.into() }
    }
}
