use super::*;

#[test]
fn fills_then_fades() {
    let bar = LoadingBar::new(&TimingTable::default()).unwrap();

    let start = bar.visual_at(0.0);
    assert_eq!(start.scale.x, 0.0);
    assert_eq!(start.scale.y, 1.0);
    assert_eq!(start.opacity, 1.0);

    let half = bar.visual_at(0.5);
    assert!(half.scale.x > 0.0 && half.scale.x < 1.0);
    assert_eq!(half.opacity, 1.0);

    let filled = bar.visual_at(1.0);
    assert_eq!(filled.scale.x, 1.0);
    assert_eq!(filled.opacity, 1.0);

    let gone = bar.visual_at(bar.finished_at());
    assert_eq!(gone.opacity, 0.0);
    assert_eq!(bar.finished_at(), 1.5);
}
