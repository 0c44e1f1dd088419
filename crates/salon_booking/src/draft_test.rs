#[cfg(test)]
mod tests {
    use crate::draft::{BookingDraft, ServiceSelection};
    use chrono::{NaiveDate, NaiveTime};

    fn haircut() -> ServiceSelection {
        ServiceSelection {
            service_id: 1,
            duration_minutes: 30,
        }
    }

    fn coloring() -> ServiceSelection {
        ServiceSelection {
            service_id: 2,
            duration_minutes: 90,
        }
    }

    fn a_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 3).unwrap()
    }

    #[test]
    fn test_empty_draft_is_incomplete() {
        let draft = BookingDraft::new();
        assert!(!draft.is_complete());
        assert!(draft.reservation_request("Lucia").is_none());
    }

    #[test]
    fn test_full_selection_produces_request() {
        let draft = BookingDraft::new()
            .select_service(haircut())
            .select_worker(7)
            .select_date(a_date())
            .select_slot(NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        assert!(draft.is_complete());
        let request = draft.reservation_request("Lucia").unwrap();
        assert_eq!(request.worker_id, 7);
        assert_eq!(request.service_id, 1);
        assert_eq!(request.date, "2026-09-03");
        assert_eq!(request.start_time, "09:30");
        // End time derives from the service duration.
        assert_eq!(request.end_time.as_deref(), Some("10:00"));
        assert_eq!(request.client_name, "Lucia");
    }

    #[test]
    fn test_new_service_resets_downstream_choices() {
        let draft = BookingDraft::new()
            .select_service(haircut())
            .select_worker(7)
            .select_date(a_date())
            .select_slot(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .select_service(coloring());

        assert_eq!(draft.service(), Some(coloring()));
        assert_eq!(draft.worker_id(), None);
        assert_eq!(draft.date(), None);
        assert_eq!(draft.slot_start(), None);
    }

    #[test]
    fn test_new_worker_keeps_service_resets_date_and_slot() {
        let draft = BookingDraft::new()
            .select_service(haircut())
            .select_worker(7)
            .select_date(a_date())
            .select_slot(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .select_worker(8);

        assert_eq!(draft.service(), Some(haircut()));
        assert_eq!(draft.worker_id(), Some(8));
        assert_eq!(draft.date(), None);
        assert_eq!(draft.slot_start(), None);
    }

    #[test]
    fn test_new_date_resets_slot_only() {
        let other_date = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        let draft = BookingDraft::new()
            .select_service(haircut())
            .select_worker(7)
            .select_date(a_date())
            .select_slot(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .select_date(other_date);

        assert_eq!(draft.worker_id(), Some(7));
        assert_eq!(draft.date(), Some(other_date));
        assert_eq!(draft.slot_start(), None);
        assert!(!draft.is_complete());
    }
}
