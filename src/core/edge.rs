/// An undirected weighted edge.
///
/// The order of `from` and `to` carries no meaning for undirected algorithms,
/// it only records the order in which the endpoints were given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<VI, W> {
    pub from: VI,
    pub to: VI,
    pub weight: W,
}

impl<VI, W> Edge<VI, W> {
    pub fn new(from: VI, to: VI, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Maps both endpoints, keeping the weight.
    pub fn map<U, F>(self, mut f: F) -> Edge<U, W>
    where
        F: FnMut(VI) -> U,
    {
        Edge {
            from: f(self.from),
            to: f(self.to),
            weight: self.weight,
        }
    }
}

impl<VI, W> From<(VI, VI, W)> for Edge<VI, W> {
    fn from((from, to, weight): (VI, VI, W)) -> Self {
        Self { from, to, weight }
    }
}
