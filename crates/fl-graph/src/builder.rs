//! Validating, incremental construction of a [`HubGraph`].

use rustc_hash::FxHashMap;
use tracing::warn;

use fl_core::{ConfigError, ConfigResult, HubId, HubRole, LinkId, ZoneKind};

use crate::graph::{pair_key, Bounds, Hub, HubGraph, Link};

/// Construct a [`HubGraph`] one hub and link at a time, then call
/// [`build`](Self::build).
///
/// Every structural rule is checked at the call that could break it, so a
/// map loader can report the offending line immediately.  `build` checks the
/// whole-graph rules (one Start, one End, a positive drone count).
///
/// # Example
///
/// ```
/// use fl_core::{HubRole, ZoneKind};
/// use fl_graph::HubGraphBuilder;
///
/// let mut b = HubGraphBuilder::new("line");
/// b.add_hub("s", 0, 0, HubRole::Start, ZoneKind::Normal, 2).unwrap();
/// b.add_hub("e", 1, 0, HubRole::End, ZoneKind::Normal, 1).unwrap();
/// b.add_link("s", "e", 1).unwrap();
/// b.set_drone_count(2);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.hub_count(), 2);
/// assert_eq!(graph.link_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HubGraphBuilder {
    name:        String,
    hubs:        Vec<Hub>,
    links:       Vec<Link>,
    start:       Option<HubId>,
    end:         Option<HubId>,
    drone_count: i64,
    bounds:      Option<Bounds>,
    name_index:  FxHashMap<String, HubId>,
    pair_index:  FxHashMap<(HubId, HubId), LinkId>,
}

impl HubGraphBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Requested fleet size.  Validated by [`build`](Self::build), so a
    /// loader may set it before or after the hubs.
    pub fn set_drone_count(&mut self, count: i64) {
        self.drone_count = count;
    }

    /// Add a hub and return its id (sequential from 0).
    ///
    /// Non-positive coordinates are accepted with a warning.
    pub fn add_hub(
        &mut self,
        name:     &str,
        x:        i64,
        y:        i64,
        role:     HubRole,
        zone:     ZoneKind,
        capacity: u32,
    ) -> ConfigResult<HubId> {
        validate_name(name)?;
        if self.name_index.contains_key(name) {
            return Err(ConfigError::DuplicateHub(name.to_owned()));
        }
        if capacity == 0 && !zone.is_blocked() {
            return Err(ConfigError::InvalidHubCapacity { name: name.to_owned(), capacity });
        }

        let id = HubId(self.hubs.len() as u32);
        match role {
            HubRole::Start => match self.start {
                Some(existing) => {
                    return Err(ConfigError::DuplicateStart {
                        existing:  self.hubs[existing.index()].name.clone(),
                        duplicate: name.to_owned(),
                    });
                }
                None => self.start = Some(id),
            },
            HubRole::End => match self.end {
                Some(existing) => {
                    return Err(ConfigError::DuplicateEnd {
                        existing:  self.hubs[existing.index()].name.clone(),
                        duplicate: name.to_owned(),
                    });
                }
                None => self.end = Some(id),
            },
            HubRole::Normal => {}
        }

        if x <= 0 || y <= 0 {
            warn!(hub = name, x, y, "hub coordinates should be positive integers");
        }

        match self.bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => self.bounds = Some(Bounds::point(x, y)),
        }

        self.name_index.insert(name.to_owned(), id);
        self.hubs.push(Hub {
            id,
            name: name.to_owned(),
            x,
            y,
            role,
            zone,
            capacity,
            color: None,
        });
        Ok(id)
    }

    /// Attach a display colour to a hub added earlier.
    pub fn set_color(&mut self, hub: HubId, color: impl Into<String>) {
        if let Some(h) = self.hubs.get_mut(hub.index()) {
            h.color = Some(color.into());
        }
    }

    /// Connect two existing hubs with an undirected link.
    pub fn add_link(&mut self, hub_a: &str, hub_b: &str, capacity: u32) -> ConfigResult<LinkId> {
        let a = self.lookup(hub_a)?;
        let b = self.lookup(hub_b)?;
        if a == b {
            return Err(ConfigError::SelfLink(hub_a.to_owned()));
        }
        let key = pair_key(a, b);
        if self.pair_index.contains_key(&key) {
            return Err(ConfigError::DuplicateLink(hub_a.to_owned(), hub_b.to_owned()));
        }

        let id = LinkId(self.links.len() as u32);
        self.pair_index.insert(key, id);
        self.links.push(Link { id, a, b, capacity });
        Ok(id)
    }

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn hub_id(&self, name: &str) -> Option<HubId> {
        self.name_index.get(name).copied()
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    /// Check the whole-graph rules and produce the immutable [`HubGraph`].
    ///
    /// Time complexity: O(L log L) for the half-edge sort, L = links.
    pub fn build(self) -> ConfigResult<HubGraph> {
        if self.drone_count <= 0 {
            return Err(ConfigError::InvalidDroneCount(self.drone_count));
        }
        let start = self.start.ok_or(ConfigError::MissingStart)?;
        let end = self.end.ok_or(ConfigError::MissingEnd)?;
        let drone_count = u32::try_from(self.drone_count)
            .map_err(|_| ConfigError::InvalidDroneCount(self.drone_count))?;

        let hub_count = self.hubs.len();

        // Half-edges in link order; the stable sort keeps that order within
        // each source hub.
        let mut half: Vec<(HubId, LinkId, HubId)> = Vec::with_capacity(self.links.len() * 2);
        for l in &self.links {
            half.push((l.a, l.id, l.b));
            half.push((l.b, l.id, l.a));
        }
        half.sort_by_key(|&(from, _, _)| from);

        let adj_link: Vec<LinkId> = half.iter().map(|&(_, l, _)| l).collect();
        let adj_hub:  Vec<HubId>  = half.iter().map(|&(_, _, to)| to).collect();

        let mut hub_out_start = vec![0u32; hub_count + 1];
        for &(from, _, _) in &half {
            hub_out_start[from.index() + 1] += 1;
        }
        for i in 1..=hub_count {
            hub_out_start[i] += hub_out_start[i - 1];
        }
        debug_assert_eq!(hub_out_start[hub_count] as usize, half.len());

        Ok(HubGraph {
            name: self.name,
            hubs: self.hubs,
            links: self.links,
            start,
            end,
            drone_count,
            bounds: self.bounds,
            hub_out_start,
            adj_link,
            adj_hub,
            name_index: self.name_index,
            pair_index: self.pair_index,
        })
    }

    fn lookup(&self, name: &str) -> ConfigResult<HubId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownHub(name.to_owned()))
    }
}

fn validate_name(name: &str) -> ConfigResult<()> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyHubName);
    }
    if name.contains('-') || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidHubName(name.to_owned()));
    }
    Ok(())
}
