//! Sign-up command handlers. Both walk the same screen flow the
//! interactive front end uses so the per-step checks apply.

use crate::cli::{EmployerSignup, WorkerSignup};
use crate::models::Skill;
use crate::services::{AuthScreen, RegisterRole, RegistrationFlow};
use crate::state::SharedState;

fn walk_to_area(flow: &mut RegistrationFlow) -> anyhow::Result<()> {
    while flow.screen() != AuthScreen::Area {
        flow.next()?;
    }
    Ok(())
}

pub fn cmd_register_worker(state: &SharedState, signup: WorkerSignup) -> anyhow::Result<()> {
    let mut flow = RegistrationFlow::new();
    flow.open_register();
    flow.choose_role(RegisterRole::Worker);

    flow.form.name = signup.name;
    flow.form.phone = signup.phone;
    flow.form.skill = Some(Skill::from(signup.skill.as_str()));
    flow.form.daily_wage = Some(signup.wage);
    flow.form.experience_years = signup.experience;
    flow.form.bio = signup.bio;
    flow.form.photo_url = signup.photo_url;
    flow.form.id_proof_url = signup.id_proof_url;
    flow.form.area = signup.area;

    walk_to_area(&mut flow)?;
    let user = flow.submit(state.auth.as_ref())?;

    println!("✓ Registered {} [{}]", user.name(), user.id());
    println!("Your profile is pending approval by the chowk manager.");
    Ok(())
}

pub fn cmd_register_employer(state: &SharedState, signup: EmployerSignup) -> anyhow::Result<()> {
    let mut flow = RegistrationFlow::new();
    flow.open_register();
    flow.choose_role(RegisterRole::Employer);

    flow.form.name = signup.name;
    flow.form.phone = signup.phone;
    flow.form.bio = signup.bio;
    flow.form.area = signup.area;

    walk_to_area(&mut flow)?;
    let user = flow.submit(state.auth.as_ref())?;

    println!("✓ Registered {} [{}]", user.name(), user.id());
    println!("Find workers with: kaamchowk employer workers --skill <skill>");
    Ok(())
}
