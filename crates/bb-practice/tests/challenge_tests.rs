use crate::common::{TestContextBuilder, at};
use bb_practice::{
    PracticeError,
    challenge::{advance_challenge, today_challenge},
};
use bb_progress::challenge::generate_daily_challenge;
use bb_store::repositories::{ChallengeRepository, LearnerRepository};
use rand::{SeedableRng, rngs::StdRng};
use uuid::Uuid;

#[test]
fn test_one_challenge_per_day() -> anyhow::Result<()> {
    let ctx = TestContextBuilder::new().build()?;

    let morning = today_challenge(&ctx.state, ctx.learner_id, at(1, 8))?;
    let evening = today_challenge(&ctx.state, ctx.learner_id, at(1, 21))?;
    let tomorrow = today_challenge(&ctx.state, ctx.learner_id, at(2, 8))?;

    assert_eq!(morning.challenge.id, evening.challenge.id);
    assert_eq!(morning.challenge.date, at(1, 8).date_naive());
    assert_ne!(morning.challenge.id, tomorrow.challenge.id);
    assert_eq!(morning.progress, 0);
    assert!(!morning.completed);

    Ok(())
}

#[test]
fn test_reward_paid_once() -> anyhow::Result<()> {
    let ctx = TestContextBuilder::new().build()?;
    let today = today_challenge(&ctx.state, ctx.learner_id, at(1, 8))?;
    let challenge = today.challenge;

    for step in 1..challenge.target {
        let outcome = advance_challenge(&ctx.state, ctx.learner_id, challenge.id, 1, at(1, 9))?;
        assert_eq!(outcome.progress, step);
        assert!(!outcome.completed);
        assert_eq!(outcome.xp_awarded, 0);
    }

    let done = advance_challenge(&ctx.state, ctx.learner_id, challenge.id, 1, at(1, 10))?;
    assert!(done.completed);
    assert_eq!(done.completed_at, Some(at(1, 10)));
    assert_eq!(done.xp_awarded, challenge.xp_reward);

    let extra = advance_challenge(&ctx.state, ctx.learner_id, challenge.id, 2, at(1, 11))?;
    assert!(extra.completed);
    assert_eq!(extra.progress, challenge.target + 2);
    assert_eq!(extra.completed_at, Some(at(1, 10)));
    assert_eq!(extra.xp_awarded, 0);

    let learner = ctx
        .state
        .store
        .find_learner(ctx.learner_id)?
        .expect("learner should exist");
    assert_eq!(learner.total_xp(), challenge.xp_reward);

    let today = today_challenge(&ctx.state, ctx.learner_id, at(1, 12))?;
    assert!(today.completed);
    assert_eq!(today.progress, challenge.target + 2);

    Ok(())
}

#[test]
fn test_large_increment_completes_at_once() -> anyhow::Result<()> {
    let ctx = TestContextBuilder::new().build()?;
    let mut rng = StdRng::seed_from_u64(7);
    let challenge = ctx
        .state
        .store
        .insert_challenge_if_absent(generate_daily_challenge(at(3, 0).date_naive(), &mut rng))?;

    let outcome = advance_challenge(
        &ctx.state,
        ctx.learner_id,
        challenge.id,
        challenge.target + 10,
        at(3, 9),
    )?;

    assert!(outcome.completed);
    assert_eq!(outcome.xp_awarded, challenge.xp_reward);

    Ok(())
}

#[test]
fn test_zero_increment_rejected() -> anyhow::Result<()> {
    let ctx = TestContextBuilder::new().build()?;
    let today = today_challenge(&ctx.state, ctx.learner_id, at(1, 8))?;

    let err = advance_challenge(&ctx.state, ctx.learner_id, today.challenge.id, 0, at(1, 9))
        .expect_err("zero increment should fail");
    assert!(matches!(err, PracticeError::InvalidArgument(_)));

    let stored = ctx
        .state
        .store
        .find_challenge_progress(ctx.learner_id, today.challenge.id)?;
    assert!(stored.is_none());

    Ok(())
}

#[test]
fn test_unknown_challenge_or_learner() -> anyhow::Result<()> {
    let ctx = TestContextBuilder::new().build()?;
    let today = today_challenge(&ctx.state, ctx.learner_id, at(1, 8))?;

    let err = advance_challenge(&ctx.state, ctx.learner_id, Uuid::new_v4(), 1, at(1, 9))
        .expect_err("unknown challenge should fail");
    assert!(matches!(err, PracticeError::NotFound(_)));

    let err = advance_challenge(&ctx.state, Uuid::new_v4(), today.challenge.id, 1, at(1, 9))
        .expect_err("unknown learner should fail");
    assert!(matches!(err, PracticeError::NotFound(_)));

    Ok(())
}
