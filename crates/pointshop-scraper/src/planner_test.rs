use super::*;

const BASE: &str =
    "https://api.steampowered.com/ILoyaltyRewardsService/QueryRewardItems/v1/?count=1000";

fn limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn three_apps() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1435780", "Farm Frenzy Refreshed"),
        ("440", "Team Fortress 2"),
        ("92800", "SpaceChem"),
    ]
}

/// Counts `appids[` occurrences in a request URL.
fn ids_in(url: &str) -> usize {
    url.matches("appids[").count()
}

#[test]
fn splits_into_batches_at_limit() {
    let batch = plan(three_apps(), BASE, limit(2), &Identity);

    assert_eq!(batch.urls.len(), 2);
    assert_eq!(
        batch.urls[0],
        format!("{BASE}&appids[0]=1435780&appids[1]=440")
    );
    assert_eq!(batch.urls[1], format!("{BASE}&appids[0]=92800"));
}

#[test]
fn exact_multiple_has_no_trailing_empty_request() {
    let batch = plan(
        vec![("1435780", "Farm Frenzy Refreshed"), ("440", "Team Fortress 2")],
        BASE,
        limit(2),
        &Identity,
    );

    assert_eq!(batch.urls, vec![format!("{BASE}&appids[0]=1435780&appids[1]=440")]);
}

#[test]
fn request_count_is_ceiling_of_accepted_over_limit() {
    let entries: Vec<(String, String)> = (1..=23)
        .map(|i| (i.to_string(), format!("App {i}")))
        .collect();

    for l in 1..=25 {
        let batch = plan(entries.clone(), BASE, limit(l), &Identity);
        assert_eq!(batch.urls.len(), 23usize.div_ceil(l), "limit {l}");
        assert!(batch.urls.iter().all(|u| (1..=l).contains(&ids_in(u))), "limit {l}");
        let total: usize = batch.urls.iter().map(|u| ids_in(u)).sum();
        assert_eq!(total, 23, "limit {l}");
    }
}

#[test]
fn empty_input_yields_no_requests() {
    let batch = plan(Vec::<(&str, &str)>::new(), BASE, limit(400), &Identity);
    assert!(batch.urls.is_empty());
    assert!(batch.app.is_empty());
}

#[test]
fn blank_values_are_skipped() {
    let batch = plan(
        vec![("", "-- choose a game --"), ("   ", "spacer"), ("440", "Team Fortress 2")],
        BASE,
        limit(400),
        &Identity,
    );
    assert_eq!(batch.app.len(), 1);
    assert_eq!(batch.urls, vec![format!("{BASE}&appids[0]=440")]);
}

#[test]
fn records_name_and_points_shop_url() {
    let batch = plan(three_apps(), BASE, limit(400), &Identity);
    let entry = &batch.app[&AppId::from(440)];
    assert_eq!(entry.name, "Team Fortress 2");
    assert_eq!(
        entry.points_shop_url,
        "https://store.steampowered.com/points/shop/app/440"
    );
}

#[test]
fn digit_extraction_keeps_first_label() {
    let batch = plan(
        vec![
            ("app-1435780", "Farm Frenzy Refreshed"),
            ("app-1435780#goty", "Farm Frenzy Refreshed - GOTY"),
        ],
        BASE,
        limit(400),
        &PatternId::digits(),
    );

    assert_eq!(batch.app.len(), 1);
    assert_eq!(batch.app[&AppId::from(1_435_780)].name, "Farm Frenzy Refreshed");
    assert_eq!(batch.urls, vec![format!("{BASE}&appids[0]=1435780")]);
}

#[test]
fn pattern_capture_group_is_preferred() {
    let strategy = PatternId::new(r"app/(\d+)/").unwrap();
    assert_eq!(
        strategy.canonical_id("https://store.steampowered.com/app/440/tf2"),
        Some(AppId::from(440))
    );
    assert_eq!(strategy.canonical_id("no id here"), None);
}

#[test]
fn invalid_pattern_is_an_error() {
    assert!(PatternId::new("(unclosed").is_err());
}

#[test]
fn rejected_values_are_skipped() {
    let batch = plan(
        vec![("header", "Pick one"), ("440", "Team Fortress 2")],
        BASE,
        limit(400),
        &PatternId::digits(),
    );
    assert_eq!(batch.app.len(), 1);
}

#[test]
fn closures_work_as_strategies() {
    let upper = |raw: &str| Some(AppId::new(raw.to_uppercase()));
    let batch = plan(vec![("abc", "Lowercase")], BASE, limit(1), &upper);
    assert!(batch.app.contains_key(&AppId::from("ABC")));
}

#[test]
fn label_is_trimmed_and_blank_label_falls_back_to_id() {
    let batch = plan(
        vec![("440", "  Team Fortress 2 \n"), ("7", "")],
        BASE,
        limit(400),
        &Identity,
    );
    assert_eq!(batch.app[&AppId::from(440)].name, "Team Fortress 2");
    assert_eq!(batch.app[&AppId::from(7)].name, "7");
}

#[test]
fn item_classes_are_appended_in_order() {
    assert_eq!(
        with_item_classes(BASE, &[15, 3]),
        format!("{BASE}&community_item_classes[0]=15&community_item_classes[1]=3")
    );
    assert_eq!(with_item_classes(BASE, &[]), BASE);
}

#[test]
fn app_list_feeds_the_planner() {
    let apps: Vec<AppListEntry> = serde_json::from_value(serde_json::json!([
        { "appid": 440, "name": "Team Fortress 2" },
        { "appid": 92800, "name": "SpaceChem" },
        { "appid": 440, "name": "Team Fortress 2 (dup)" }
    ]))
    .unwrap();

    let batch = plan_app_list(&apps, BASE, limit(400));
    assert_eq!(batch.app.len(), 2);
    assert_eq!(batch.app[&AppId::from(440)].name, "Team Fortress 2");
    assert_eq!(batch.urls.len(), 1);
}

#[test]
fn plan_serializes_to_config_layout() {
    let batch = plan(vec![("440", "Team Fortress 2")], BASE, limit(400), &Identity);
    let value = serde_json::to_value(&batch).unwrap();
    assert_eq!(value["app"]["440"]["name"], "Team Fortress 2");
    assert_eq!(
        value["app"]["440"]["pointsShopUrl"],
        "https://store.steampowered.com/points/shop/app/440"
    );
    assert_eq!(value["urls"][0], format!("{BASE}&appids[0]=440"));

    let round_trip: BatchPlan = serde_json::from_value(value).unwrap();
    assert_eq!(round_trip, batch);
}
