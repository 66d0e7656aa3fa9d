//! Unit tests for fl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DroneId, HubId, LinkId};

    #[test]
    fn index_roundtrip() {
        let id = HubId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(HubId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(HubId::INVALID.0, u32::MAX);
        assert_eq!(LinkId::INVALID.0, u32::MAX);
        assert_eq!(HubId::default(), HubId::INVALID);
    }

    #[test]
    fn display_and_label() {
        assert_eq!(HubId(7).to_string(), "HubId(7)");
        assert_eq!(DroneId(3).label(), "D3");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn arithmetic() {
        let t = Tick(5);
        assert_eq!(t + 2, Tick(7));
        assert_eq!(t.offset(3), Tick(8));
        assert_eq!(Tick(9) - t, 4);
        assert_eq!(Tick(9).since(t), 4);
    }

    #[test]
    fn prev_saturates_at_zero() {
        assert_eq!(Tick(3).prev(), Some(Tick(2)));
        assert_eq!(Tick::ZERO.prev(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod zone {
    use crate::{ConfigError, HubRole, ZoneKind};

    #[test]
    fn weights_are_ordered() {
        assert!(ZoneKind::Priority.weight() < ZoneKind::Normal.weight());
        assert!(ZoneKind::Normal.weight() < ZoneKind::Restricted.weight());
        assert!(ZoneKind::Restricted.weight() < ZoneKind::Blocked.weight());
    }

    #[test]
    fn restricted_entry_takes_two_ticks() {
        assert_eq!(ZoneKind::Priority.transit_ticks(), 1);
        assert_eq!(ZoneKind::Normal.transit_ticks(), 1);
        assert_eq!(ZoneKind::Restricted.transit_ticks(), 2);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Restricted".parse::<ZoneKind>().unwrap(), ZoneKind::Restricted);
        assert_eq!("BLOCKED".parse::<ZoneKind>().unwrap(), ZoneKind::Blocked);
        assert_eq!("priority".parse::<ZoneKind>().unwrap(), ZoneKind::Priority);
        assert_eq!(
            "swamp".parse::<ZoneKind>(),
            Err(ConfigError::UnknownZone("swamp".into()))
        );
    }

    #[test]
    fn role_keywords_roundtrip() {
        for role in [HubRole::Normal, HubRole::Start, HubRole::End] {
            assert_eq!(role.keyword().parse::<HubRole>().unwrap(), role);
        }
        assert!("depot".parse::<HubRole>().is_err());
    }
}
