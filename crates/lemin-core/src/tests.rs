//! Unit tests for lemin-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AntId, RoomId};

    #[test]
    fn index_roundtrip() {
        let id = RoomId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoomId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AntId(1) < AntId(2));
        assert!(RoomId(100) > RoomId(99));
    }

    #[test]
    fn room_placeholder_is_out_of_range() {
        assert_eq!(RoomId::NONE.0, u32::MAX);
        assert!(RoomId::try_from(u32::MAX as usize).is_ok_and(|r| r == RoomId::NONE));
        assert!(RoomId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn ant_range_is_one_based() {
        let ants: Vec<AntId> = AntId::range(3).collect();
        assert_eq!(ants, vec![AntId(1), AntId(2), AntId(3)]);
        assert_eq!(ants[0], AntId::FIRST);
        assert_eq!(AntId::range(0).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(AntId(7).to_string(), "#7");
        assert_eq!(RoomId(12).to_string(), "#12");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn first_tick_follows_zero() {
        assert_eq!(Tick::ZERO.next(), Tick::FIRST);
        assert_eq!(Tick::default(), Tick::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, NeighborOrder, RunConfig, Strategy};

    #[test]
    fn defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.strategy, Strategy::Dfs);
        assert_eq!(cfg.neighbor_order, NeighborOrder::Declared);
        assert_eq!(cfg.enumeration_limit, None);
        assert_eq!(cfg.tick_limit, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!(" dfs ".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!("best".parse::<Strategy>().unwrap(), Strategy::Best);
        assert_eq!(
            "flow".parse::<Strategy>(),
            Err(CoreError::UnknownStrategy("flow".into()))
        );
    }

    #[test]
    fn strategy_display_roundtrips() {
        for s in [Strategy::Dfs, Strategy::Bfs, Strategy::Best] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn order_parses() {
        assert_eq!("lex".parse::<NeighborOrder>().unwrap(), NeighborOrder::Lexicographic);
        assert_eq!("declared".parse::<NeighborOrder>().unwrap(), NeighborOrder::Declared);
        assert!("random".parse::<NeighborOrder>().is_err());
    }

    #[test]
    fn zero_limits_rejected() {
        let cfg = RunConfig { enumeration_limit: Some(0), ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = RunConfig { tick_limit: Some(0), ..RunConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }
}
