// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract class declaration.
//!
//! Declaring registers a Sierra class on chain. Classes are content-addressed, so a class that is
//! already declared is treated as success, with the class hash recomputed from the local artifact.
//! A compiled class hash mismatch means the local CASM differs from what the network expects for
//! the same class and is always fatal.

use std::path::Path;

use crate::core::{
    artifact::{ArtifactError, DeclarationAttempt},
    chain::{
        await_confirmation, ChainClient, ChainError, ChainErrorKind, ConfirmationConfig,
        ConfirmationError,
    },
    encoding::FieldElement,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclarationState {
    NotStarted,
    Declaring,
    WaitingConfirmation { transaction_hash: FieldElement },
    Declared {
        class_hash: FieldElement,
        transaction_hash: FieldElement,
    },
    AlreadyDeclared { class_hash: FieldElement },
    Failed,
}

impl DeclarationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Declared { .. } | Self::AlreadyDeclared { .. } | Self::Failed
        )
    }
}

/// Successful end of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationOutcome {
    Declared {
        class_hash: FieldElement,
        transaction_hash: FieldElement,
    },
    AlreadyDeclared { class_hash: FieldElement },
}

impl DeclarationOutcome {
    pub fn class_hash(&self) -> FieldElement {
        match self {
            Self::Declared { class_hash, .. } | Self::AlreadyDeclared { class_hash } => *class_hash,
        }
    }

    pub fn transaction_hash(&self) -> Option<FieldElement> {
        match self {
            Self::Declared {
                transaction_hash, ..
            } => Some(*transaction_hash),
            Self::AlreadyDeclared { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeclareError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("declare submission failed: {0}")]
    SubmissionFailed(#[source] ChainError),

    #[error(
        "compiled class hash mismatch for class {class_hash}: \
         the local CASM artifact differs from the one expected on chain"
    )]
    HashMismatch { class_hash: FieldElement },

    #[error("declare tx {transaction_hash} failed to confirm: {source}")]
    ConfirmationFailed {
        transaction_hash: FieldElement,
        #[source]
        source: ConfirmationError,
    },
}

/// How a rejected declare submission is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareRejection {
    AlreadyDeclared,
    HashMismatch,
    Other,
}

/// Classifies a declare submission error.
///
/// Structured kinds take precedence. Message matching covers clients and nodes that only report
/// text.
pub fn classify_declare_error(err: &ChainError) -> DeclareRejection {
    match err.kind {
        ChainErrorKind::ClassAlreadyDeclared => return DeclareRejection::AlreadyDeclared,
        ChainErrorKind::CompiledClassHashMismatch => return DeclareRejection::HashMismatch,
        ChainErrorKind::Other => {}
    }
    let message = err.message.to_ascii_lowercase();
    if message.contains("already declared") {
        DeclareRejection::AlreadyDeclared
    } else if message.contains("compiled class hash") {
        DeclareRejection::HashMismatch
    } else {
        DeclareRejection::Other
    }
}

/// Drives one declaration to a terminal state.
#[derive(Debug)]
pub struct DeclarationOrchestrator<'a, C> {
    client: &'a C,
    confirmation: ConfirmationConfig,
    state: DeclarationState,
}

impl<'a, C: ChainClient> DeclarationOrchestrator<'a, C> {
    pub fn new(client: &'a C, confirmation: ConfirmationConfig) -> Self {
        Self {
            client,
            confirmation,
            state: DeclarationState::NotStarted,
        }
    }

    pub fn state(&self) -> &DeclarationState {
        &self.state
    }

    /// Loads the artifact pair and declares it.
    pub async fn declare_files(
        &mut self,
        sierra: impl AsRef<Path>,
        casm: impl AsRef<Path>,
    ) -> Result<DeclarationOutcome, DeclareError> {
        let attempt = match DeclarationAttempt::load(sierra, casm) {
            Ok(attempt) => attempt,
            Err(err) => return Err(self.fail(err.into())),
        };
        self.declare(&attempt).await
    }

    pub async fn declare(
        &mut self,
        attempt: &DeclarationAttempt,
    ) -> Result<DeclarationOutcome, DeclareError> {
        let class_hash = attempt.class_hash();
        self.transition(DeclarationState::Declaring);
        info!(@grey, "declaring class {}", class_hash.lavender());

        let submission = match self.client.submit_declare(attempt).await {
            Ok(submission) => submission,
            Err(err) => return self.rejected(class_hash, err),
        };
        let transaction_hash = submission.transaction_hash;
        if submission.class_hash != class_hash {
            warn!(@yellow,
                "node reported class hash {} but the artifact hashes to {}",
                submission.class_hash,
                class_hash
            );
        }

        self.transition(DeclarationState::WaitingConfirmation { transaction_hash });
        if let Err(source) =
            await_confirmation(self.client, transaction_hash, &self.confirmation).await
        {
            return Err(self.fail(DeclareError::ConfirmationFailed {
                transaction_hash,
                source,
            }));
        }

        self.transition(DeclarationState::Declared {
            class_hash,
            transaction_hash,
        });
        info!(@grey, "declared class {}", class_hash.mint());
        Ok(DeclarationOutcome::Declared {
            class_hash,
            transaction_hash,
        })
    }

    fn rejected(
        &mut self,
        class_hash: FieldElement,
        err: ChainError,
    ) -> Result<DeclarationOutcome, DeclareError> {
        match classify_declare_error(&err) {
            DeclareRejection::AlreadyDeclared => {
                self.transition(DeclarationState::AlreadyDeclared { class_hash });
                info!(@grey, "class {} is already declared", class_hash.mint());
                Ok(DeclarationOutcome::AlreadyDeclared { class_hash })
            }
            DeclareRejection::HashMismatch => {
                Err(self.fail(DeclareError::HashMismatch { class_hash }))
            }
            DeclareRejection::Other => Err(self.fail(DeclareError::SubmissionFailed(err))),
        }
    }

    fn fail(&mut self, err: DeclareError) -> DeclareError {
        self.transition(DeclarationState::Failed);
        err
    }

    fn transition(&mut self, next: DeclarationState) {
        debug!(@grey, "declaration: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
