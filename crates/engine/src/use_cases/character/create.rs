//! Create character use case.
//!
//! Validates a creation request against the reference tables and the current
//! roster, then stores the new character. Checks run in a fixed order and the
//! first one that fails decides the outcome code.

use std::ops::ControlFlow;
use std::sync::Arc;

use charserver_domain::{Appearance, CharCreateCode, CharacterName, NewCharacter, TemplateSetId};

use crate::infrastructure::ports::{
    AbilityPort, CharacterRepo, ReferenceDataPort, SessionContext, TemplateSetRepo,
};

use super::error::CharacterError;

/// What the client asked for on the creation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCharacterInput {
    pub name: String,
    pub race: u8,
    pub class: u8,
    pub sex: u8,
    pub appearance: Appearance,
    pub template_set_id: TemplateSetId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreationCheck {
    RaceAndClassExist,
    RaceClassCombination,
    NameAvailable,
    TemplateSet,
}

/// Evaluated in order; the first `Break` is the outcome.
const CREATION_CHECKS: [CreationCheck; 4] = [
    CreationCheck::RaceAndClassExist,
    CreationCheck::RaceClassCombination,
    CreationCheck::NameAvailable,
    CreationCheck::TemplateSet,
];

type CheckResult = Result<ControlFlow<CharCreateCode>, CharacterError>;

pub struct CreateCharacter {
    characters: Arc<dyn CharacterRepo>,
    templates: Arc<dyn TemplateSetRepo>,
    reference: Arc<dyn ReferenceDataPort>,
    abilities: Arc<dyn AbilityPort>,
    strict_write_outcome: bool,
}

impl CreateCharacter {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        templates: Arc<dyn TemplateSetRepo>,
        reference: Arc<dyn ReferenceDataPort>,
        abilities: Arc<dyn AbilityPort>,
    ) -> Self {
        Self {
            characters,
            templates,
            reference,
            abilities,
            strict_write_outcome: false,
        }
    }

    /// Report `Failed` instead of `Success` when the store rejects the insert.
    pub fn with_strict_write_outcome(mut self, strict: bool) -> Self {
        self.strict_write_outcome = strict;
        self
    }

    /// Execute the create character use case.
    ///
    /// # Returns
    /// * `Ok(CharCreateCode)` - The outcome to send back; exactly one row is
    ///   stored only on the `Success` path
    /// * `Err(CharacterError)` - A store read failed before the outcome was decided
    pub async fn execute(
        &self,
        session: SessionContext,
        input: CreateCharacterInput,
    ) -> Result<CharCreateCode, CharacterError> {
        let name = match CharacterName::new(input.name.as_str()) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(account_id = %session.account_id, error = %e, "Rejected character name");
                return Ok(CharCreateCode::Failed);
            }
        };

        for check in CREATION_CHECKS {
            if let ControlFlow::Break(code) = self.run_check(check, session, &input, &name).await? {
                tracing::debug!(
                    account_id = %session.account_id,
                    ?check,
                    ?code,
                    "Character creation stopped"
                );
                return Ok(code);
            }
        }

        let Some(spawn) = self.reference.creation_data(input.race, input.class) else {
            tracing::warn!(
                race = input.race,
                class = input.class,
                "No creation data for race/class combination"
            );
            return Ok(CharCreateCode::Failed);
        };

        let new_character = NewCharacter::at_spawn(
            name,
            session.account_id,
            session.realm_id,
            input.race,
            input.class,
            input.sex,
            input.appearance,
            &spawn,
        );

        match self.characters.insert(&new_character).await {
            Ok(character) => {
                tracing::info!(
                    account_id = %session.account_id,
                    guid = %character.guid,
                    name = %character.name,
                    "Character created"
                );
                if let Err(e) = self.abilities.learn_start_abilities(&character).await {
                    tracing::error!(guid = %character.guid, error = %e, "Failed to grant start abilities");
                }
                Ok(CharCreateCode::Success)
            }
            Err(e) if self.strict_write_outcome => {
                tracing::warn!(
                    account_id = %session.account_id,
                    constraint = e.is_constraint_violation(),
                    error = %e,
                    "Character insert rejected"
                );
                Ok(CharCreateCode::Failed)
            }
            Err(e) => {
                // Non-strict mode keeps the legacy Success outcome on a rejected insert.
                tracing::warn!(
                    account_id = %session.account_id,
                    constraint = e.is_constraint_violation(),
                    error = %e,
                    "Character insert rejected, reporting success"
                );
                Ok(CharCreateCode::Success)
            }
        }
    }

    async fn run_check(
        &self,
        check: CreationCheck,
        session: SessionContext,
        input: &CreateCharacterInput,
        name: &CharacterName,
    ) -> CheckResult {
        match check {
            CreationCheck::RaceAndClassExist => Ok(fail_unless(
                self.reference.has_race(input.race) && self.reference.has_class(input.class),
                CharCreateCode::Failed,
            )),
            CreationCheck::RaceClassCombination => Ok(fail_unless(
                self.reference.has_race_class(input.race, input.class),
                CharCreateCode::Failed,
            )),
            CreationCheck::NameAvailable => {
                let taken = self.characters.name_exists(name).await?;
                Ok(fail_unless(!taken, CharCreateCode::NameInUse))
            }
            CreationCheck::TemplateSet => self.check_template_set(session, input.template_set_id).await,
        }
    }

    async fn check_template_set(
        &self,
        session: SessionContext,
        template_set_id: TemplateSetId,
    ) -> CheckResult {
        if template_set_id.is_zero() {
            return Ok(ControlFlow::Continue(()));
        }

        let offered = self
            .templates
            .account_template_set_ids(session.account_id)
            .await?
            .contains(&template_set_id)
            || self
                .templates
                .realm_template_set_ids(session.realm_id)
                .await?
                .contains(&template_set_id);

        if !offered {
            tracing::debug!(%template_set_id, "Template set not offered to account or realm");
            return Ok(ControlFlow::Break(CharCreateCode::Failed));
        }

        let template = self.templates.get(template_set_id).await?;
        // Template-based creation is not implemented; an offered template still fails.
        tracing::info!(
            %template_set_id,
            found = template.is_some(),
            "Template-based character creation is not implemented"
        );
        Ok(ControlFlow::Break(CharCreateCode::Failed))
    }
}

fn fail_unless(ok: bool, code: CharCreateCode) -> ControlFlow<CharCreateCode> {
    if ok {
        ControlFlow::Continue(())
    } else {
        ControlFlow::Break(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockAbilityPort, MockCharacterRepo, MockReferenceDataPort, MockTemplateSetRepo, RepoError,
    };
    use charserver_domain::{
        AccountId, Character, CharacterFlags, CharacterGuid, CreationData, Position, RealmId,
        TemplateSet,
    };

    const HUMAN: u8 = 1;
    const WARRIOR: u8 = 1;
    const DRUID: u8 = 11;

    fn session() -> SessionContext {
        SessionContext::new(AccountId::new(10), RealmId::new(2))
    }

    fn input(name: &str) -> CreateCharacterInput {
        CreateCharacterInput {
            name: name.to_string(),
            race: HUMAN,
            class: WARRIOR,
            sex: 0,
            appearance: Appearance {
                skin: 1,
                face: 2,
                hair_style: 3,
                hair_color: 4,
                facial_hair_style: 5,
            },
            template_set_id: TemplateSetId::new(0),
        }
    }

    fn spawn() -> CreationData {
        CreationData {
            race: HUMAN,
            class: WARRIOR,
            map: 0,
            zone: 12,
            position: Position {
                x: -8949.95,
                y: -132.493,
                z: 83.5312,
                orientation: 0.0,
            },
            start_abilities: vec![78, 2457],
        }
    }

    /// Human warriors only; druid is a known class humans can't play.
    fn reference() -> MockReferenceDataPort {
        let mut reference = MockReferenceDataPort::new();
        reference
            .expect_has_race()
            .returning(|race| race == HUMAN);
        reference
            .expect_has_class()
            .returning(|class| class == WARRIOR || class == DRUID);
        reference
            .expect_has_race_class()
            .returning(|race, class| race == HUMAN && class == WARRIOR);
        reference
            .expect_creation_data()
            .returning(|race, class| (race == HUMAN && class == WARRIOR).then(spawn));
        reference
    }

    fn stored_from(new: &NewCharacter) -> Character {
        Character::from_new(CharacterGuid::new(100), 0, new.clone())
    }

    fn use_case(
        characters: MockCharacterRepo,
        templates: MockTemplateSetRepo,
        reference: MockReferenceDataPort,
        abilities: MockAbilityPort,
    ) -> CreateCharacter {
        CreateCharacter::new(
            Arc::new(characters),
            Arc::new(templates),
            Arc::new(reference),
            Arc::new(abilities),
        )
    }

    #[tokio::test]
    async fn when_race_unknown_fails_without_touching_store() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().never();
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );
        let mut request = input("Varian");
        request.race = 99;

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_class_unknown_fails() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );
        let mut request = input("Varian");
        request.class = 42;

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_race_class_incompatible_fails_before_name_check() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().never();
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );
        let mut request = input("Varian");
        request.class = DRUID;

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_name_taken_on_any_account_reports_name_in_use() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_name_exists()
            .withf(|name| name.as_str() == "Varian")
            .returning(|_| Ok(true));
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::NameInUse);
    }

    #[tokio::test]
    async fn when_name_blank_fails_without_lookup() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().never();
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );

        let code = use_case.execute(session(), input("   ")).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_name_long_or_padded_stores_it_unchanged() {
        for name in ["Abcdefghijklm", "Jaina "] {
            let mut characters = MockCharacterRepo::new();
            characters
                .expect_name_exists()
                .withf(move |candidate| candidate.as_str() == name)
                .returning(|_| Ok(false));
            characters
                .expect_insert()
                .withf(move |new| new.name.as_str() == name)
                .times(1)
                .returning(|new| Ok(stored_from(new)));

            let mut abilities = MockAbilityPort::new();
            abilities.expect_learn_start_abilities().returning(|_| Ok(()));

            let use_case = use_case(characters, MockTemplateSetRepo::new(), reference(), abilities);

            let code = use_case.execute(session(), input(name)).await.expect("execute");
            assert_eq!(code, CharCreateCode::Success);
        }
    }

    #[tokio::test]
    async fn when_template_not_offered_fails() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters.expect_insert().never();

        let mut templates = MockTemplateSetRepo::new();
        templates
            .expect_account_template_set_ids()
            .withf(|id| *id == AccountId::new(10))
            .returning(|_| Ok(vec![TemplateSetId::new(1)]));
        templates
            .expect_realm_template_set_ids()
            .withf(|id| *id == RealmId::new(2))
            .returning(|_| Ok(vec![TemplateSetId::new(2)]));
        templates.expect_get().never();

        let use_case = use_case(characters, templates, reference(), MockAbilityPort::new());
        let mut request = input("Varian");
        request.template_set_id = TemplateSetId::new(7);

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_template_offered_by_realm_still_fails() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters.expect_insert().never();

        let mut templates = MockTemplateSetRepo::new();
        templates
            .expect_account_template_set_ids()
            .returning(|_| Ok(vec![]));
        templates
            .expect_realm_template_set_ids()
            .returning(|_| Ok(vec![TemplateSetId::new(7)]));
        templates
            .expect_get()
            .withf(|id| *id == TemplateSetId::new(7))
            .times(1)
            .returning(|id| {
                Ok(Some(TemplateSet {
                    id,
                    name: "Level 90 Boost".to_string(),
                    description: String::new(),
                }))
            });

        let use_case = use_case(characters, templates, reference(), MockAbilityPort::new());
        let mut request = input("Varian");
        request.template_set_id = TemplateSetId::new(7);

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_template_offered_by_account_skips_realm_lookup() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters.expect_insert().never();

        let mut templates = MockTemplateSetRepo::new();
        templates
            .expect_account_template_set_ids()
            .returning(|_| Ok(vec![TemplateSetId::new(3)]));
        templates.expect_realm_template_set_ids().never();
        templates.expect_get().returning(|_| Ok(None));

        let use_case = use_case(characters, templates, reference(), MockAbilityPort::new());
        let mut request = input("Varian");
        request.template_set_id = TemplateSetId::new(3);

        let code = use_case.execute(session(), request).await.expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_no_creation_data_fails() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters.expect_insert().never();

        let mut reference = MockReferenceDataPort::new();
        reference.expect_has_race().returning(|_| true);
        reference.expect_has_class().returning(|_| true);
        reference.expect_has_race_class().returning(|_, _| true);
        reference.expect_creation_data().returning(|_, _| None);

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference,
            MockAbilityPort::new(),
        );

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_valid_stores_level_one_character_at_spawn() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters
            .expect_insert()
            .withf(|new| {
                new.name.as_str() == "Varian"
                    && new.account_id == AccountId::new(10)
                    && new.realm_id == RealmId::new(2)
                    && new.level == 1
                    && new.map == 0
                    && new.zone == 12
                    && new.position == spawn().position
                    && new.flags == CharacterFlags::DECLINED
                    && new.first_login
                    && new.appearance.hair_color == 4
            })
            .times(1)
            .returning(|new| Ok(stored_from(new)));

        let mut abilities = MockAbilityPort::new();
        abilities
            .expect_learn_start_abilities()
            .withf(|character| character.guid == CharacterGuid::new(100))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = use_case(characters, MockTemplateSetRepo::new(), reference(), abilities);

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::Success);
    }

    #[tokio::test]
    async fn when_ability_grant_fails_still_succeeds() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters
            .expect_insert()
            .returning(|new| Ok(stored_from(new)));

        let mut abilities = MockAbilityPort::new();
        abilities
            .expect_learn_start_abilities()
            .times(1)
            .returning(|_| Err(RepoError::database("learn_start_abilities", "busy")));

        let use_case = use_case(characters, MockTemplateSetRepo::new(), reference(), abilities);

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::Success);
    }

    #[tokio::test]
    async fn when_insert_rejected_reports_success_without_abilities() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters
            .expect_insert()
            .returning(|_| Err(RepoError::constraint("UNIQUE constraint failed: characters.name")));

        let mut abilities = MockAbilityPort::new();
        abilities.expect_learn_start_abilities().never();

        let use_case = use_case(characters, MockTemplateSetRepo::new(), reference(), abilities);

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::Success);
    }

    #[tokio::test]
    async fn when_insert_rejected_in_strict_mode_reports_failed() {
        let mut characters = MockCharacterRepo::new();
        characters.expect_name_exists().returning(|_| Ok(false));
        characters
            .expect_insert()
            .returning(|_| Err(RepoError::constraint("UNIQUE constraint failed: characters.name")));

        let mut abilities = MockAbilityPort::new();
        abilities.expect_learn_start_abilities().never();

        let use_case = use_case(characters, MockTemplateSetRepo::new(), reference(), abilities)
            .with_strict_write_outcome(true);

        let code = use_case
            .execute(session(), input("Varian"))
            .await
            .expect("execute");
        assert_eq!(code, CharCreateCode::Failed);
    }

    #[tokio::test]
    async fn when_name_lookup_fails_propagates() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_name_exists()
            .returning(|_| Err(RepoError::database("name_exists", "locked")));
        characters.expect_insert().never();

        let use_case = use_case(
            characters,
            MockTemplateSetRepo::new(),
            reference(),
            MockAbilityPort::new(),
        );

        let result = use_case.execute(session(), input("Varian")).await;
        assert!(matches!(result, Err(CharacterError::Repo(_))));
    }
}
